//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{self, Catalog};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds configuration and the process-wide
/// catalog; everything visitor-specific lives in the visitor's session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: &'static Catalog,
}

impl AppState {
    /// Create application state over the built-in catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(config, catalog::catalog())
    }

    /// Create application state over a specific catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: &'static Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.inner.catalog
    }
}
