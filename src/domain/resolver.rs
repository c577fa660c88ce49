//! Host name resolution seam.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// Resolves a host name to network addresses.
///
/// The production implementation is
/// [`crate::infrastructure::dns::SystemResolver`]. Hosts may be domain names
/// or IP literals; an IP literal resolves to itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Looks up the addresses for `host`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the lookup fails.
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
