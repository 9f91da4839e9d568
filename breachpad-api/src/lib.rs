pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, build_router, start};
