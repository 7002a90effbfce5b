//! Validation of submitted URLs.

use std::sync::Arc;
use tracing::debug;
use url::Host;

use crate::domain::resolver::HostResolver;
use crate::error::AppError;
use crate::utils::url_syntax::check_url_syntax;

/// Decides whether a submitted string may be shortened.
///
/// A submission is valid when it passes [`check_url_syntax`] and its host
/// exists according to the configured [`HostResolver`]. IP literal hosts are
/// not looked up.
#[derive(Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Validates a submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the input is missing, malformed,
    /// lacks a protocol, or names a host that does not resolve.
    pub async fn validate(&self, input: Option<&str>) -> Result<(), AppError> {
        let input = input.ok_or_else(|| AppError::invalid_url("URL is missing"))?;

        let url = check_url_syntax(input).map_err(|e| AppError::invalid_url(e.to_string()))?;

        if let Some(Host::Domain(domain)) = url.host()
            && !self.resolver.resolves(domain).await
        {
            debug!(host = domain, "Host did not resolve");
            return Err(AppError::invalid_url(format!(
                "Host '{domain}' does not resolve"
            )));
        }

        Ok(())
    }
}
