//! # Verdant Domain
//!
//! Data-transfer types and error definitions for the Verdant greenhouse
//! tracking API.
//!
//! This crate contains:
//! - DTOs mirroring server-side models (users, clients, employees, plants,
//!   seeds, journal records, growth stages)
//! - Closed enumerations for the numeric trait fields
//! - The error taxonomy and `Result` alias shared by the client crate
//!
//! ## Architecture
//! - No dependencies on other Verdant crates
//! - Pure data shapes: DTOs are transport records, not domain logic. The
//!   client never mutates or validates them beyond deserialization; a
//!   server-assigned `id` is treated as immutable.

pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::{Result, VerdantError};
pub use types::*;
