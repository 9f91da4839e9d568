use crate::error::ApiError;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use breachpad_core::{BreachpadError, NewPost, Post};
use std::sync::Arc;

pub async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<Post>> {
    Json(state.store.all_posts())
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    match state.store.get_post(id) {
        Some(post) => Ok(Json(post)),
        None => Err(BreachpadError::PostNotFound(id).into()),
    }
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewPost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    if body.title.trim().is_empty() || body.content.trim().is_empty() {
        return Err(BreachpadError::InvalidInput("title and content are required".into()).into());
    }

    let post = state.store.create_post(body.title, body.content);
    Ok((StatusCode::CREATED, Json(post)))
}
