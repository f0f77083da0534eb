//! HTTP interface for the Wayfarer recommender.
//!
//! # Endpoints
//!
//! - `GET /` - health check
//! - `GET /recommend?query=&top_n=` - text similarity ranking
//! - `GET /recommend-traits?query=&top_n=` - trait similarity ranking
//! - `GET /recommend-hybrid?query=&top_n=&alpha=` - weighted blend of both
//! - `POST /recommend-vibe?top_n=` - ranking against explicit trait values
//! - `GET /suggest?q=` - name and city autocomplete
//!
//! Every failure is answered with `400` and a `{"error": "..."}` body.

#![forbid(unsafe_code)]

use std::net::SocketAddr;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

mod error;
mod handlers;
mod state;

pub use error::{ApiError, ErrorResponse, ServeError};
pub use handlers::MessageResponse;
pub use state::AppState;

/// Origin allowed to call the API when none is configured.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Build the router with CORS restricted to `allowed_origin`.
///
/// # Errors
/// Returns [`ServeError::InvalidOrigin`] when the origin is not a valid
/// header value.
pub fn create_router(state: AppState, allowed_origin: &str) -> Result<Router, ServeError> {
    let origin =
        HeaderValue::from_str(allowed_origin).map_err(|source| ServeError::InvalidOrigin {
            origin: allowed_origin.to_owned(),
            source,
        })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .route("/", get(handlers::home))
        .route("/recommend", get(handlers::recommend))
        .route("/recommend-hybrid", get(handlers::recommend_hybrid))
        .route("/recommend-traits", get(handlers::recommend_traits))
        .route("/recommend-vibe", post(handlers::recommend_vibe))
        .route("/suggest", get(handlers::suggest))
        .layer(cors)
        .with_state(state))
}

/// Serve `router` on `addr` until the process stops.
///
/// # Errors
/// Returns [`ServeError::Bind`] when the listener cannot be bound and
/// [`ServeError::Serve`] when serving fails.
pub async fn serve(router: Router, addr: SocketAddr) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    log::info!("listening on {addr}");
    axum::serve(listener, router)
        .await
        .map_err(ServeError::Serve)
}
