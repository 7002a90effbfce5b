//! Data Transfer Objects for API requests and responses.

pub mod health;
pub mod hello;
pub mod shorten;

pub use health::{CheckStatus, HealthChecks, HealthResponse};
pub use hello::HelloResponse;
pub use shorten::{ShortenRequest, ShortenResponse};
