#![allow(dead_code)]

use async_trait::async_trait;
use shorturl::application::services::MappingService;
use shorturl::domain::repositories::MappingStore;
use shorturl::domain::resolver::HostResolver;
use shorturl::infrastructure::persistence::MemoryMappingStore;
use shorturl::state::AppState;
use std::collections::HashSet;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/// Resolver that knows a fixed set of hosts and never touches the network.
pub struct StaticResolver {
    hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        if self.hosts.contains(host) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))])
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "unknown host"))
        }
    }
}

pub const KNOWN_HOSTS: &[&str] = &[
    "example.com",
    "www.example.com",
    "rust-lang.org",
    "docs.rs",
    "crates.io",
];

pub fn test_resolver() -> Arc<StaticResolver> {
    Arc::new(StaticResolver::new(KNOWN_HOSTS))
}

pub fn create_test_service(
    store: Arc<MemoryMappingStore>,
) -> MappingService<MemoryMappingStore, StaticResolver> {
    MappingService::new(store, test_resolver())
}

pub fn create_test_state() -> (AppState, Arc<MemoryMappingStore>) {
    let store = Arc::new(MemoryMappingStore::new());
    let store_dyn: Arc<dyn MappingStore> = store.clone();
    let resolver: Arc<dyn HostResolver> = test_resolver();

    let service = MappingService::new(store_dyn, resolver);
    let state = AppState::new(Arc::new(service));

    (state, store)
}
