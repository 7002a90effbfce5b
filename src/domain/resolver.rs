//! Host resolution seam used by URL validation.

use async_trait::async_trait;

/// Answers whether a hostname exists.
///
/// Production code resolves through DNS
/// ([`crate::infrastructure::dns::DnsResolver`]); tests and deployments with
/// `DNS_CHECK=false` use [`crate::infrastructure::dns::NoopResolver`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns `true` if `host` resolves to at least one address.
    ///
    /// Lookup failures and timeouts are reported as `false`, never as errors.
    async fn resolves(&self, host: &str) -> bool;
}
