//! Growth stage service

use serde::Serialize;
use verdant_domain::{GrowthStage, Result};

use crate::api::ClientFactory;
use crate::services::resource::ResourceApi;

/// Façade over the `/growth-stages` collection.
pub struct GrowthStageService {
    resource: ResourceApi<GrowthStage>,
}

impl GrowthStageService {
    /// Build a ready service from the current token.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` if no token is stored.
    pub fn new(factory: &ClientFactory) -> Result<Self> {
        Ok(Self { resource: ResourceApi::new(factory, "/growth-stages")? })
    }

    pub async fn list(&self) -> Result<Vec<GrowthStage>> {
        self.resource.list().await
    }

    pub async fn get(&self, id: &str) -> Result<GrowthStage> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize>(&self, payload: &B) -> Result<GrowthStage> {
        self.resource.create(payload).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, payload: &B) -> Result<GrowthStage> {
        self.resource.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.resource.remove(id).await
    }
}
