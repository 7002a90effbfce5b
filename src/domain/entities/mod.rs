//! Core domain entities.
//!
//! - [`UrlRecord`] - the only persisted entity: an original URL and its short id

pub mod url_record;

pub use url_record::UrlRecord;
