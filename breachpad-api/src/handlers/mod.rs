pub mod comments;
pub mod health;
pub mod posts;
pub mod search;
pub mod waf_logs;
