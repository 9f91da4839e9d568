use thiserror::Error;

/// Unified error type for Breachpad.
#[derive(Error, Debug)]
pub enum BreachpadError {
    #[error("Post not found: {0}")]
    PostNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read WAF log: {0}")]
    WafLogRead(#[source] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Internal: {0}")]
    Internal(String),
}

impl BreachpadError {
    /// Map to HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            BreachpadError::PostNotFound(_) => 404,
            BreachpadError::CommentNotFound(_) => 404,
            BreachpadError::InvalidInput(_) => 400,
            BreachpadError::WafLogRead(_) => 500,
            BreachpadError::ConfigError(_) => 500,
            BreachpadError::StoreError(_) => 500,
            _ => 500,
        }
    }

    /// JSON error body.
    pub fn to_json_body(&self) -> Vec<u8> {
        let status = self.status_code();
        let msg = self.to_string();
        format!(r#"{{"error":"{}","status":{}}}"#, msg, status).into_bytes()
    }
}
