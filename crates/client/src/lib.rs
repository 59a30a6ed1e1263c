//! # Verdant Client
//!
//! Authenticated API-service layer for the Verdant greenhouse tracking API.
//!
//! This crate provides:
//! - A token store abstraction over the platform keychain
//! - An API client factory that builds bearer-configured HTTP clients
//! - Per-entity service façades (users, clients, employees, administrators,
//!   plants, seeds, journal records, growth stages)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ Service façades  │  UserService, PlantService, ...
//! └────────┬─────────┘
//!          │
//!          ├──► ClientFactory   (reads TokenStore, builds ApiClient)
//!          │         │
//!          │         └──► TokenStore   (keychain or in-memory)
//!          │
//!          └──► ApiClient       (bearer-token HTTP verbs)
//! ```
//!
//! Façades are ready the moment their constructor returns; there is no
//! separate initialization step. A constructed [`api::ApiClient`] is
//! immutable; changing the stored token means building a new client (or a
//! new façade) through the factory. Every call is at-most-once: no retries,
//! no backoff, no deduplication, and failures propagate to the caller
//! unchanged.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use verdant_client::api::{ApiConfig, ClientFactory};
//! use verdant_client::services::{PlantService, UserService};
//! use verdant_client::token::KeyringTokenStore;
//!
//! # async fn example() -> verdant_domain::Result<()> {
//! let config = ApiConfig::load()?;
//! let store = Arc::new(KeyringTokenStore::new("Verdant", "api"));
//! let factory = ClientFactory::new(config, store);
//!
//! let mut users = UserService::new(&factory)?;
//! users.login("grower", "hunter2").await?;
//!
//! // Built after login, so it carries the fresh token.
//! let plants = PlantService::new(&factory)?;
//! for plant in plants.list().await? {
//!     println!("{}", plant.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod http;
pub mod services;
pub mod token;

pub use api::{ApiClient, ApiConfig, ClientFactory};
pub use http::HttpClient;
pub use token::{KeyringTokenStore, MemoryTokenStore, TokenStore};
