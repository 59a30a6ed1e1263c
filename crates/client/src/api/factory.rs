//! API client factory
//!
//! Ties the immutable [`ApiConfig`] to the injected [`TokenStore`]. The
//! factory reads the *current* token every time it builds a client, so a
//! façade constructed after a login carries the fresh credential while
//! clients built earlier keep the token they were born with.

use std::sync::Arc;

use verdant_domain::{Result, VerdantError};

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::token::TokenStore;

/// Builds ready-to-use [`ApiClient`]s from the current token store state.
#[derive(Clone)]
pub struct ClientFactory {
    config: ApiConfig,
    store: Arc<dyn TokenStore>,
}

impl ClientFactory {
    /// Create a factory over the given configuration and token store.
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<dyn TokenStore>) -> Self {
        Self { config, store }
    }

    /// The request configuration shared by all built clients.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The injected token store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Build a client without credentials, for login/register endpoints.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn anonymous(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config, None)
    }

    /// Build a client carrying the currently stored bearer token.
    ///
    /// Fails fast when no token is stored: calling an authenticated
    /// endpoint without a credential is a precondition violation, not
    /// something to discover via a 401 round trip.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` if the store holds no token, or an
    /// error if the store cannot be read / the client cannot be built.
    pub fn authenticated(&self) -> Result<ApiClient> {
        let token = self
            .store
            .get()?
            .ok_or_else(|| VerdantError::Auth("No stored token; log in first".to_string()))?;

        ApiClient::new(&self.config, Some(token))
    }
}
