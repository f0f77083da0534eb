//! Error types surfaced by the HTTP layer.

use std::net::SocketAddr;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{StatusCode, header::InvalidHeaderValue},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use wayfarer_recommender::RecommendError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}

/// Failures of a single request. Every variant maps to `400 Bad Request`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The recommender rejected the request.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// The query string could not be parsed.
    #[error("invalid query parameters: {0}")]
    Query(#[from] QueryRejection),
    /// The request body was missing or malformed.
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::debug!("rejecting request: {self}");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Failures while starting or running the server.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The CORS origin is not a valid header value.
    #[error("invalid allowed origin '{origin}'")]
    InvalidOrigin {
        /// Configured origin.
        origin: String,
        /// Header parsing failure.
        #[source]
        source: InvalidHeaderValue,
    },
    /// Binding the listener failed.
    #[error("failed to bind {addr}")]
    Bind {
        /// Requested socket address.
        addr: SocketAddr,
        /// Source I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server terminated unexpectedly")]
    Serve(#[source] std::io::Error),
}
