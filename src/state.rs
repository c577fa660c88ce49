//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::DynMappingService;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<DynMappingService>,
}

impl AppState {
    pub fn new(mapping_service: Arc<DynMappingService>) -> Self {
        Self { mapping_service }
    }
}
