//! Utility functions shared across layers.
//!
//! - [`url_syntax`] - Syntactic validation of submitted URLs

pub mod url_syntax;
