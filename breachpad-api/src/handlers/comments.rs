use crate::error::ApiError;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use breachpad_core::{BreachpadError, Comment, NewComment};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Json<Vec<Comment>> {
    Json(state.store.comments_for_post(post_id))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Json(body): Json<NewComment>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    if body.author.trim().is_empty() || body.content.trim().is_empty() {
        return Err(BreachpadError::InvalidInput("author and content are required".into()).into());
    }

    // Content is stored exactly as submitted; escaping is the renderer's job
    debug!(post_id, author = %body.author, "Storing comment");
    let comment = state.store.create_comment(post_id, body.author, body.content)?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if !state.store.delete_comment(comment_id) {
        return Err(BreachpadError::CommentNotFound(comment_id).into());
    }
    Ok(Json(json!({ "message": "Comment deleted successfully" })))
}
