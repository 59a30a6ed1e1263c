//! Client (customer) account service

use serde::Serialize;
use verdant_domain::{ClientAccount, Result};

use crate::api::ClientFactory;
use crate::services::resource::ResourceApi;

/// Façade over the `/clients` collection.
pub struct ClientService {
    resource: ResourceApi<ClientAccount>,
}

impl ClientService {
    /// Build a ready service from the current token.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` if no token is stored.
    pub fn new(factory: &ClientFactory) -> Result<Self> {
        Ok(Self { resource: ResourceApi::new(factory, "/clients")? })
    }

    pub async fn list(&self) -> Result<Vec<ClientAccount>> {
        self.resource.list().await
    }

    pub async fn get(&self, id: &str) -> Result<ClientAccount> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize>(&self, payload: &B) -> Result<ClientAccount> {
        self.resource.create(payload).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, payload: &B) -> Result<ClientAccount> {
        self.resource.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.resource.remove(id).await
    }
}
