//! DTOs mirroring the Verdant server models
//!
//! All types serialize with camelCase field names to match the wire format.
//! Optional fields are skipped when absent so a payload round-trips through
//! the client byte-for-byte at the JSON level.

pub mod accounts;
pub mod journal;
pub mod plants;
pub mod user;

pub use accounts::{Administrator, ClientAccount, Employee};
pub use journal::{GrowthStage, JournalRecord};
pub use plants::{Flowering, FruitBearing, Plant, Reproduction, Seed, Viability};
pub use user::{AuthUser, LoginRequest, LoginResponse, RegisterRequest, UserProfile};
