//! User service: authentication handshake and profile access
//!
//! The one façade with a token side effect. `login` posts credentials with
//! an anonymous client, seeds the token store with the returned bearer
//! token, and rebuilds its own authenticated client. Clients are immutable,
//! so a credential change always means a rebuild, never a mutation.

use tracing::{debug, info};
use verdant_domain::{AuthUser, LoginRequest, LoginResponse, RegisterRequest, Result, UserProfile, VerdantError};

use crate::api::{ApiClient, ClientFactory};

/// Façade over the authentication and user endpoints.
pub struct UserService {
    factory: ClientFactory,
    api: Option<ApiClient>,
}

impl UserService {
    /// Build a ready service.
    ///
    /// If the store already holds a token (a previous session), the
    /// authenticated client is constructed eagerly; otherwise the service
    /// starts logged out and only `login`/`register` are usable.
    ///
    /// # Errors
    /// Returns error if the token store cannot be read or a client cannot
    /// be built.
    pub fn new(factory: &ClientFactory) -> Result<Self> {
        let api = match factory.store().get()? {
            Some(_) => Some(factory.authenticated()?),
            None => None,
        };

        Ok(Self { factory: factory.clone(), api })
    }

    /// Whether a bearer token is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.api.is_some()
    }

    /// Authenticate with username and password.
    ///
    /// On success the returned token is written to the token store, the
    /// service's authenticated client is rebuilt with it, and the response
    /// payload is returned unchanged. One shot: a rejected login is an
    /// `Auth` error, never retried.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` on rejected credentials, `Network` on
    /// transport failure, `Internal` if the store cannot be written.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse> {
        debug!(username = %username, "Logging in");

        let request =
            LoginRequest { username: username.to_string(), password: password.to_string() };
        let response: LoginResponse =
            self.factory.anonymous()?.post("/auth/login", &request).await?;

        self.factory.store().set(&response.token)?;
        self.api = Some(self.factory.authenticated()?);

        info!(user_id = %response.user.id, "Login successful");
        Ok(response)
    }

    /// Register a new account. No token side effect; log in afterwards.
    ///
    /// # Errors
    /// Returns `Validation` on rejected payloads, `Network` on transport
    /// failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthUser> {
        self.factory.anonymous()?.post("/auth/register", request).await
    }

    /// Fetch the authenticated user's profile from the "me" endpoint.
    ///
    /// The payload is returned exactly as the server sent it.
    ///
    /// # Errors
    /// Returns `VerdantError::Auth` when not logged in or when the server
    /// rejects the credential.
    pub async fn my_profile(&self) -> Result<UserProfile> {
        self.authenticated_api()?.get("/users/me").await
    }

    /// Clear the stored token and drop the authenticated client.
    ///
    /// # Errors
    /// Returns error if the token store cannot be written.
    pub fn logout(&mut self) -> Result<()> {
        self.factory.store().clear()?;
        self.api = None;
        info!("Logged out");
        Ok(())
    }

    fn authenticated_api(&self) -> Result<&ApiClient> {
        self.api
            .as_ref()
            .ok_or_else(|| VerdantError::Auth("Not authenticated; log in first".to_string()))
    }
}
