use crate::error::ApiError;
use crate::server::AppState;
use axum::{extract::State, response::Json};
use breachpad_waf::{WafLogEntry, read_waf_log};
use std::sync::Arc;

/// `GET /api/waf-logs` — re-read and re-parse the WAF error log, newest
/// decision first.
///
/// The whole file is parsed fresh on every poll; there is no cache and no
/// pagination. A missing log file is an empty feed, any other read failure
/// becomes a 500 with a JSON error body.
pub async fn list_waf_logs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WafLogEntry>>, ApiError> {
    let entries = read_waf_log(&state.waf_log_path, &state.waf_parser)?;
    Ok(Json(entries))
}
