//! Hostname resolvers backing URL validation.

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tokio::time::timeout;
use tracing::debug;

use crate::domain::resolver::HostResolver;

/// Resolves hostnames through the system resolver.
///
/// Each lookup is bounded by a timeout; a lookup that does not finish in time
/// counts as a failure.
pub struct DnsResolver {
    timeout: Duration,
}

impl DnsResolver {
    /// Creates a resolver with the given per-lookup timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolves(&self, host: &str) -> bool {
        // lookup_host needs a port; it is not used for the check.
        match timeout(self.timeout, lookup_host((host, 0))).await {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(e)) => {
                debug!(host, error = %e, "DNS lookup failed");
                false
            }
            Err(_) => {
                debug!(host, timeout_ms = self.timeout.as_millis() as u64, "DNS lookup timed out");
                false
            }
        }
    }
}

/// Resolver that accepts every host.
///
/// Used when the DNS check is disabled and in tests that must not touch the
/// network.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResolver;

impl NoopResolver {
    pub fn new() -> Self {
        debug!("Using NoopResolver (DNS check disabled)");
        Self
    }
}

#[async_trait]
impl HostResolver for NoopResolver {
    async fn resolves(&self, _host: &str) -> bool {
        true
    }
}
