//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Handles shared by all requests.
///
/// Cloned per request; the service behind the `Arc` owns the store and
/// resolver handles, so there is no module-level connection state.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener_service: Arc<ShortenerService>) -> Self {
        Self { shortener_service }
    }
}
