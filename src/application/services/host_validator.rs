//! URL host validation.

use std::io;
use std::net::IpAddr;
use std::sync::Arc;

use tracing::debug;
use url::{Host, Url};

use crate::domain::resolver::HostResolver;

/// Reasons a URL fails host validation.
#[derive(Debug, thiserror::Error)]
pub enum HostRejection {
    #[error("unparseable URL: {0}")]
    Unparseable(#[from] url::ParseError),

    #[error("URL has no host")]
    MissingHost,

    #[error("lookup failed: {0}")]
    Lookup(#[from] io::Error),

    #[error("lookup returned no addresses")]
    NoAddresses,
}

/// Decides whether a submitted URL points at a resolvable host.
///
/// This is a resolvability gate only. A host that resolves but refuses
/// connections still passes. Each call performs one lookup with no retry.
pub struct HostValidator<R: HostResolver + ?Sized> {
    resolver: Arc<R>,
}

impl<R: HostResolver + ?Sized> HostValidator<R> {
    pub fn new(resolver: Arc<R>) -> Self {
        Self { resolver }
    }

    /// Returns `true` if the URL has a host that resolves to at least one address.
    pub async fn validate(&self, url: &str) -> bool {
        match self.inspect(url).await {
            Ok(_) => true,
            Err(reason) => {
                debug!("Rejected {}: {}", url, reason);
                false
            }
        }
    }

    /// Resolves the URL's host and returns its addresses.
    ///
    /// # Errors
    ///
    /// Returns a [`HostRejection`] describing why the URL was rejected.
    pub async fn inspect(&self, url: &str) -> Result<Vec<IpAddr>, HostRejection> {
        let host = extract_host(url)?;
        let addresses = self.resolver.lookup(&host).await?;

        if addresses.is_empty() {
            return Err(HostRejection::NoAddresses);
        }

        Ok(addresses)
    }
}

/// Extracts the host component in a form a resolver accepts.
///
/// IPv6 literals are returned without brackets.
fn extract_host(url: &str) -> Result<String, HostRejection> {
    let parsed = Url::parse(url)?;

    match parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_string()),
        Some(Host::Ipv4(ip)) => Ok(ip.to_string()),
        Some(Host::Ipv6(ip)) => Ok(ip.to_string()),
        _ => Err(HostRejection::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::MockHostResolver;
    use std::net::Ipv4Addr;

    fn localhost() -> Vec<IpAddr> {
        vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]
    }

    #[test]
    fn test_extract_host_domain() {
        assert_eq!(
            extract_host("https://Example.com/path?q=1").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_extract_host_ip_literals() {
        assert_eq!(extract_host("http://127.0.0.1:8080/").unwrap(), "127.0.0.1");
        assert_eq!(extract_host("http://[::1]/").unwrap(), "::1");
    }

    #[test]
    fn test_extract_host_rejects_relative() {
        assert!(matches!(
            extract_host("example.com"),
            Err(HostRejection::Unparseable(_))
        ));
    }

    #[test]
    fn test_extract_host_rejects_hostless() {
        assert!(matches!(
            extract_host("javascript:alert(1)"),
            Err(HostRejection::MissingHost)
        ));
        assert!(matches!(
            extract_host("file:///etc/passwd"),
            Err(HostRejection::MissingHost)
        ));
    }

    #[tokio::test]
    async fn test_validate_resolvable_host() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .withf(|host| host == "example.com")
            .times(1)
            .returning(|_| Ok(localhost()));

        let validator = HostValidator::new(Arc::new(resolver));

        assert!(validator.validate("https://example.com/page").await);
    }

    #[tokio::test]
    async fn test_validate_lookup_error() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::NotFound, "no such host")));

        let validator = HostValidator::new(Arc::new(resolver));

        assert!(!validator.validate("http://nowhere.invalid").await);
    }

    #[tokio::test]
    async fn test_validate_empty_lookup_result() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let validator = HostValidator::new(Arc::new(resolver));

        let result = validator.inspect("https://example.com").await;
        assert!(matches!(result, Err(HostRejection::NoAddresses)));
    }

    #[tokio::test]
    async fn test_validate_unparseable_skips_lookup() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().times(0);

        let validator = HostValidator::new(Arc::new(resolver));

        assert!(!validator.validate("not a url").await);
        assert!(!validator.validate("").await);
    }
}
