//! Application state shared across the client.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::store::{CartStore, SessionStore};

/// Application state shared across all presentation logic.
///
/// This struct is cheaply cloneable via `Arc`. The session and cart
/// stores live for the lifetime of the running client; every clone
/// observes the same state.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    session: SessionStore,
    cart: CartStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let cart = CartStore::new(config.currency);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                session: SessionStore::new(),
                cart,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}
