//! Application layer services implementing business logic.
//!
//! Services consume the repository and resolver traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short URL creation and resolution
//! - [`services::url_validator::UrlValidator`] - Syntax and host existence checks

pub mod services;
