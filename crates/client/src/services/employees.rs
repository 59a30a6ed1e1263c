//! Employee service

use serde::Serialize;
use verdant_domain::{Employee, Result};

use crate::api::ClientFactory;
use crate::services::resource::ResourceApi;

/// Façade over the `/employees` collection.
pub struct EmployeeService {
    resource: ResourceApi<Employee>,
}

impl EmployeeService {
    /// Build a ready service from the current token.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` if no token is stored.
    pub fn new(factory: &ClientFactory) -> Result<Self> {
        Ok(Self { resource: ResourceApi::new(factory, "/employees")? })
    }

    pub async fn list(&self) -> Result<Vec<Employee>> {
        self.resource.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Employee> {
        self.resource.get(id).await
    }

    pub async fn create<B: Serialize>(&self, payload: &B) -> Result<Employee> {
        self.resource.create(payload).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, payload: &B) -> Result<Employee> {
        self.resource.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.resource.remove(id).await
    }
}
