use crate::server::AppState;
use axum::extract::State;
use axum::response::Json;
use serde_json::{Value, json};
use std::sync::Arc;

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let stats = state.store.stats();

    // Collect WAF log metadata so the dashboard can tell "no file yet"
    // apart from "empty file".
    let meta = std::fs::metadata(&state.waf_log_path).ok();
    let waf_log = json!({
        "path": state.waf_log_path.to_string_lossy(),
        "file_exists": meta.is_some(),
        "size_bytes": meta.as_ref().map(|m| m.len()),
    });

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "posts": stats.posts,
        "comments": stats.comments,
        "waf_log": waf_log,
    }))
}
