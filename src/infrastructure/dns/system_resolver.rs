//! Resolver backed by the operating system's name service.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use tracing::debug;

use crate::domain::resolver::HostResolver;

/// Resolves hosts with [`tokio::net::lookup_host`].
///
/// The lookup runs on Tokio's blocking pool, so the calling request is
/// suspended rather than the worker thread. IP literals resolve without a
/// network round-trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addresses: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        debug!("Resolved {} to {} address(es)", host, addresses.len());
        Ok(addresses)
    }
}
