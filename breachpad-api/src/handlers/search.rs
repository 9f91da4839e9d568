use crate::server::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use breachpad_core::Post;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/search?q=` — substring search over post titles and content.
pub async fn search_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Post>> {
    debug!(query = %params.q, "Search request");
    Json(state.store.search_posts(&params.q))
}
