//! Shared CRUD surface for entity façades
//!
//! Every entity collection on the server follows the same conventional
//! shape: `GET /xs`, `GET /xs/{id}`, `POST /xs`, `PUT /xs/{id}`,
//! `DELETE /xs/{id}`. `ResourceApi` implements those pass-throughs once;
//! the per-entity façades wrap it with their own type and expose only the
//! subset relevant to their entity.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use verdant_domain::Result;

use crate::api::{ApiClient, ClientFactory};

/// Typed CRUD client for one server collection.
///
/// Order, cardinality, and field values of server payloads are preserved
/// exactly; the resource layer never inspects the DTOs it moves.
pub(crate) struct ResourceApi<T> {
    api: ApiClient,
    base_path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ResourceApi<T> {
    /// Build an authenticated resource client for `base_path`
    /// (e.g. `"/plants"`).
    pub(crate) fn new(factory: &ClientFactory, base_path: &'static str) -> Result<Self> {
        Ok(Self { api: factory.authenticated()?, base_path, _marker: PhantomData })
    }

    pub(crate) async fn list(&self) -> Result<Vec<T>> {
        self.api.get(self.base_path).await
    }

    pub(crate) async fn get(&self, id: &str) -> Result<T> {
        self.api.get(&format!("{}/{id}", self.base_path)).await
    }

    pub(crate) async fn create<B: Serialize>(&self, payload: &B) -> Result<T> {
        self.api.post(self.base_path, payload).await
    }

    pub(crate) async fn update<B: Serialize>(&self, id: &str, payload: &B) -> Result<T> {
        self.api.put(&format!("{}/{id}", self.base_path), payload).await
    }

    pub(crate) async fn remove(&self, id: &str) -> Result<()> {
        self.api.delete(&format!("{}/{id}", self.base_path)).await
    }

    /// List with a query string appended to the collection path.
    pub(crate) async fn list_with_query(&self, query: &str) -> Result<Vec<T>> {
        self.api.get(&format!("{}?{query}", self.base_path)).await
    }
}
