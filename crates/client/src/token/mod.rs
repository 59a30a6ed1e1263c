//! Auth token lifecycle
//!
//! The bearer token is absent at cold start, written on successful login,
//! read whenever the factory builds an authenticated client, and cleared on
//! logout. The store holds the single source of truth; clients only carry a
//! transient copy fixed at construction time.
//!
//! Expiry is *not* the store's concern: [`expiry::is_expired`] is an
//! advisory check for callers that want to short-circuit an obviously dead
//! session, but the server's 401 response stays authoritative.

pub mod expiry;
pub mod store;

pub use expiry::{expires_at, is_expired};
pub use store::{KeyringTokenStore, MemoryTokenStore, TokenStore};
