//! Bearer-token API client
//!
//! Thin HTTP verbs over [`HttpClient`] with the error mapping the service
//! façades rely on. Each call is independent and at-most-once: the client
//! never retries, and every failure propagates to the caller.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use verdant_domain::{Result, VerdantError};

use crate::config::ApiConfig;
use crate::http::HttpClient;

/// Configured client for one token value.
///
/// Immutable once constructed: the base URL and bearer token are fixed.
/// Built by [`crate::api::ClientFactory`]; façades rebuild their client
/// when the stored token changes.
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Construct a client from configuration and an optional bearer token.
    ///
    /// No network side effects; construction only builds the underlying
    /// HTTP client.
    ///
    /// # Errors
    /// Returns `VerdantError::Network` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig, token: Option<String>) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout()).build()?;

        Ok(Self { http, base_url: config.base_url.clone(), token })
    }

    /// Whether this client was built with a bearer token.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Execute a GET request and deserialize the response body.
    ///
    /// # Errors
    /// Propagates transport, status, and deserialization failures.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(Method::GET, path, None).await
    }

    /// Execute a POST request with a JSON body.
    ///
    /// # Errors
    /// Propagates transport, status, and deserialization failures.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(to_body(body)?)).await
    }

    /// Execute a PUT request with a JSON body.
    ///
    /// # Errors
    /// Propagates transport, status, and deserialization failures.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, path, Some(to_body(body)?)).await
    }

    /// Execute a DELETE request, expecting no response body.
    ///
    /// # Errors
    /// Propagates transport and status failures.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request =
            self.http.request(method, &url).header("Content-Type", "application/json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &url, message));
        }

        // 204/205 carry no body; deserialize the unit type from null
        // instead of reading an empty payload.
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                VerdantError::Internal(format!(
                    "No content response ({}), but response type expects a body",
                    status.as_u16()
                ))
            });
        }

        let payload = response
            .json()
            .await
            .map_err(|e| VerdantError::Internal(format!("Failed to parse response: {e}")))?;

        debug!(%url, "request successful");
        Ok(payload)
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|e| VerdantError::Internal(format!("Failed to serialize body: {e}")))
}

/// Map a non-2xx status to the error taxonomy.
///
/// 401/403 are authentication failures, other 4xx carry the
/// server-provided message as validation failures, 5xx are server
/// failures. The body is passed through verbatim.
fn map_status_error(status: StatusCode, url: &str, body: String) -> VerdantError {
    let message = if body.is_empty() {
        format!("{url} returned status {status}")
    } else {
        format!("{url} returned status {status}: {body}")
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        VerdantError::Auth(message)
    } else if status.is_server_error() {
        VerdantError::Server(message)
    } else if status.is_client_error() {
        VerdantError::Validation(message)
    } else {
        VerdantError::Network(message)
    }
}
