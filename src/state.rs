//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// Store-agnostic URL service used by the HTTP layer.
pub type DynUrlService = UrlService<dyn UrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<DynUrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<DynUrlService>) -> Self {
        Self { url_service }
    }

    /// Builds state around any store implementation.
    pub fn from_repository(repository: Arc<dyn UrlRepository>, alias_length: usize) -> Self {
        Self::new(Arc::new(UrlService::new(repository, alias_length)))
    }
}
