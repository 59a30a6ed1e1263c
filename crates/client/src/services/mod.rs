//! Domain service façades
//!
//! One façade per entity, each owning the configured client(s) it needs.
//! Façades are the entire surface the caller may depend on: they expose
//! async domain methods, unwrap response payloads, and surface every
//! failure unchanged: no retries, no caching, no response transformation.
//!
//! Construction replaces the usual "initialize before use" dance: a façade
//! constructor reads the current token through the [`crate::api::ClientFactory`]
//! and returns a ready instance, so an uninitialized façade is not
//! representable. When the stored token changes, construct a new façade
//! (or rely on [`users::UserService::login`], which rebuilds its own
//! client after storing the fresh token).

pub mod administrators;
pub mod clients;
pub mod employees;
pub mod growth_stages;
pub mod journal;
pub mod plants;
mod resource;
pub mod seeds;
pub mod users;

pub use administrators::AdministratorService;
pub use clients::ClientService;
pub use employees::EmployeeService;
pub use growth_stages::GrowthStageService;
pub use journal::JournalRecordService;
pub use plants::PlantService;
pub use seeds::SeedService;
pub use users::UserService;
