//! Plant service

use serde::Serialize;
use verdant_domain::{Plant, Result};

use crate::api::ClientFactory;
use crate::services::resource::ResourceApi;

/// Façade over the `/plants` collection.
pub struct PlantService {
    resource: ResourceApi<Plant>,
}

impl PlantService {
    /// Build a ready service from the current token.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` if no token is stored.
    pub fn new(factory: &ClientFactory) -> Result<Self> {
        Ok(Self { resource: ResourceApi::new(factory, "/plants")? })
    }

    pub async fn list(&self) -> Result<Vec<Plant>> {
        self.resource.list().await
    }

    /// List the plants assigned to one client account.
    pub async fn list_for_client(&self, client_id: &str) -> Result<Vec<Plant>> {
        self.resource.list_with_query(&format!("clientId={client_id}")).await
    }

    pub async fn get(&self, id: &str) -> Result<Plant> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize>(&self, payload: &B) -> Result<Plant> {
        self.resource.create(payload).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, payload: &B) -> Result<Plant> {
        self.resource.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.resource.remove(id).await
    }
}
