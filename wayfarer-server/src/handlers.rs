//! Route handlers.
//!
//! Handlers only read the snapshot, so none of them await anything.
#![expect(clippy::unused_async, reason = "axum handlers must be async")]

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use wayfarer_core::Destination;
use wayfarer_recommender::{DEFAULT_ALPHA, DEFAULT_TOP_N, Recommendation, VibeRequest};

use crate::{ApiError, AppState};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Body of the health check.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Status message.
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendParams {
    #[serde(default)]
    query: String,
    #[serde(default = "default_top_n")]
    top_n: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HybridParams {
    #[serde(default)]
    query: String,
    #[serde(default = "default_top_n")]
    top_n: usize,
    #[serde(default = "default_alpha")]
    alpha: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopNParams {
    #[serde(default = "default_top_n")]
    top_n: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestParams {
    #[serde(default)]
    q: String,
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

const fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn into_destinations(results: Vec<Recommendation<'_>>) -> Vec<Destination> {
    results
        .into_iter()
        .map(|result| result.destination.clone())
        .collect()
}

pub(crate) async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Travel Recommender API is running!",
    })
}

pub(crate) async fn recommend(
    State(state): State<AppState>,
    params: Result<Query<RecommendParams>, QueryRejection>,
) -> ApiResult<Vec<Destination>> {
    let Query(params) = params?;
    log::debug!("recommend query='{}' top_n={}", params.query, params.top_n);
    let results = state
        .snapshot()
        .recommend_by_query(&params.query, params.top_n)?;
    Ok(Json(into_destinations(results)))
}

pub(crate) async fn recommend_traits(
    State(state): State<AppState>,
    params: Result<Query<RecommendParams>, QueryRejection>,
) -> ApiResult<Vec<Destination>> {
    let Query(params) = params?;
    log::debug!("recommend-traits query='{}' top_n={}", params.query, params.top_n);
    let results = state
        .snapshot()
        .recommend_by_traits(&params.query, params.top_n)?;
    Ok(Json(into_destinations(results)))
}

pub(crate) async fn recommend_hybrid(
    State(state): State<AppState>,
    params: Result<Query<HybridParams>, QueryRejection>,
) -> ApiResult<Vec<Destination>> {
    let Query(params) = params?;
    log::debug!(
        "recommend-hybrid query='{}' top_n={} alpha={}",
        params.query,
        params.top_n,
        params.alpha
    );
    let results =
        state
            .snapshot()
            .recommend_hybrid(&params.query, params.top_n, params.alpha)?;
    Ok(Json(into_destinations(results)))
}

pub(crate) async fn recommend_vibe(
    State(state): State<AppState>,
    params: Result<Query<TopNParams>, QueryRejection>,
    body: Result<Json<VibeRequest>, JsonRejection>,
) -> ApiResult<Vec<Destination>> {
    let Query(params) = params?;
    let Json(vibe) = body?;
    log::debug!("recommend-vibe {vibe:?} top_n={}", params.top_n);
    let results = state.snapshot().recommend_by_vibe(&vibe, params.top_n)?;
    Ok(Json(into_destinations(results)))
}

pub(crate) async fn suggest(
    State(state): State<AppState>,
    params: Result<Query<SuggestParams>, QueryRejection>,
) -> ApiResult<Vec<String>> {
    let Query(params) = params?;
    Ok(Json(state.snapshot().suggest(&params.q)))
}
