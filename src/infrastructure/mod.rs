//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolvers for URL validation
//! - [`persistence`] - Url record storage (PostgreSQL and in-memory)

pub mod dns;
pub mod persistence;
