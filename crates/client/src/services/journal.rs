//! Journal record service
//!
//! Records reference plants and growth stages by id; whether those ids
//! exist is the server's call, not this client's.

use serde::Serialize;
use verdant_domain::{JournalRecord, Result};

use crate::api::ClientFactory;
use crate::services::resource::ResourceApi;

/// Façade over the `/journal-records` collection.
pub struct JournalRecordService {
    resource: ResourceApi<JournalRecord>,
}

impl JournalRecordService {
    /// Build a ready service from the current token.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` if no token is stored.
    pub fn new(factory: &ClientFactory) -> Result<Self> {
        Ok(Self { resource: ResourceApi::new(factory, "/journal-records")? })
    }

    pub async fn list(&self) -> Result<Vec<JournalRecord>> {
        self.resource.list().await
    }

    /// List the records attached to one plant, in server order.
    pub async fn list_for_plant(&self, plant_id: &str) -> Result<Vec<JournalRecord>> {
        self.resource.list_with_query(&format!("plantId={plant_id}")).await
    }

    pub async fn get(&self, id: &str) -> Result<JournalRecord> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize>(&self, payload: &B) -> Result<JournalRecord> {
        self.resource.create(payload).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, payload: &B) -> Result<JournalRecord> {
        self.resource.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.resource.remove(id).await
    }
}
