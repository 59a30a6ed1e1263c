//! Seed batch service

use serde::Serialize;
use verdant_domain::{Result, Seed};

use crate::api::ClientFactory;
use crate::services::resource::ResourceApi;

/// Façade over the `/seeds` collection.
pub struct SeedService {
    resource: ResourceApi<Seed>,
}

impl SeedService {
    /// Build a ready service from the current token.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` if no token is stored.
    pub fn new(factory: &ClientFactory) -> Result<Self> {
        Ok(Self { resource: ResourceApi::new(factory, "/seeds")? })
    }

    pub async fn list(&self) -> Result<Vec<Seed>> {
        self.resource.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Seed> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize>(&self, payload: &B) -> Result<Seed> {
        self.resource.create(payload).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, payload: &B) -> Result<Seed> {
        self.resource.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.resource.remove(id).await
    }
}
