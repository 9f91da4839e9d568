use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use breachpad_core::BreachpadError;
use serde_json::json;

/// Wraps [`BreachpadError`] so handlers can use `?` and still produce the
/// `{"error": ..., "status": ...}` JSON body the dashboard expects.
#[derive(Debug)]
pub struct ApiError(pub BreachpadError);

impl From<BreachpadError> for ApiError {
    fn from(err: BreachpadError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({
            "error": self.0.to_string(),
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}
