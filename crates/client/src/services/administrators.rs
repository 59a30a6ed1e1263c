//! Administrator service
//!
//! Administrators are created and revoked but not edited through this
//! client, so there is no update pass-through.

use serde::Serialize;
use verdant_domain::{Administrator, Result};

use crate::api::ClientFactory;
use crate::services::resource::ResourceApi;

/// Façade over the `/administrators` collection.
pub struct AdministratorService {
    resource: ResourceApi<Administrator>,
}

impl AdministratorService {
    /// Build a ready service from the current token.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` if no token is stored.
    pub fn new(factory: &ClientFactory) -> Result<Self> {
        Ok(Self { resource: ResourceApi::new(factory, "/administrators")? })
    }

    pub async fn list(&self) -> Result<Vec<Administrator>> {
        self.resource.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Administrator> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize>(&self, payload: &B) -> Result<Administrator> {
        self.resource.create(payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.resource.remove(id).await
    }
}
