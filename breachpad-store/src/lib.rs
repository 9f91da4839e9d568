pub mod persist;
pub mod seed;
pub mod store;

pub use seed::SeedData;
pub use store::{BlogStore, StoreStats};
