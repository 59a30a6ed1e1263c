//! Token storage backends
//!
//! A [`TokenStore`] is an explicit context object injected into the client
//! factory, never a module-level singleton, so tests can substitute an
//! in-memory store without cross-test leakage.

use std::sync::{Mutex, PoisonError};

use keyring::Entry;
use tracing::debug;
use verdant_domain::{Result, VerdantError};

/// Persistent, synchronous, process-wide storage for the auth token.
///
/// The store never inspects the token; validity and expiry are the
/// caller's (ultimately the server's) concern.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn get(&self) -> Result<Option<String>>;

    /// Persist the token, replacing any previous value.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn set(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Clearing an empty store is not an error.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn clear(&self) -> Result<()>;

    /// Whether a token is currently stored.
    fn exists(&self) -> bool {
        matches!(self.get(), Ok(Some(_)))
    }
}

/// Token store backed by the platform keychain.
///
/// Uses the `keyring` crate: macOS Keychain, Windows Credential Manager, or
/// the Secret Service API on Linux. One service/account pair holds the
/// single token.
pub struct KeyringTokenStore {
    service: String,
    account: String,
}

impl KeyringTokenStore {
    /// Create a store for the given keychain service and account names
    /// (e.g. `"Verdant"` / `"api"`).
    #[must_use]
    pub fn new(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self { service: service.into(), account: account.into() }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service, &self.account).map_err(|e| {
            VerdantError::Internal(format!("Failed to open keychain entry: {e}"))
        })
    }
}

impl TokenStore for KeyringTokenStore {
    fn get(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(VerdantError::Internal(format!("Failed to read token: {e}"))),
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        debug!(service = %self.service, "Storing auth token");
        self.entry()?
            .set_password(token)
            .map_err(|e| VerdantError::Internal(format!("Failed to store token: {e}")))
    }

    fn clear(&self) -> Result<()> {
        debug!(service = %self.service, "Clearing auth token");
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(VerdantError::Internal(format!("Failed to clear token: {e}"))),
        }
    }
}

/// In-process token store for tests and embedding.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { inner: Mutex::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get().unwrap(), None);
        assert!(!store.exists());

        store.set("token-a").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("token-a"));
        assert!(store.exists());

        // Overwrite replaces, it does not append.
        store.set("token-b").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("token-b"));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryTokenStore::with_token("token");
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
    }
}
