//! Url record entity representing a stored short URL mapping.

/// Mapping between a submitted URL and its sequential short id.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_url: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(original_url: impl Into<String>, short_url: i64) -> Self {
        Self {
            original_url: original_url.into(),
            short_url,
        }
    }
}
