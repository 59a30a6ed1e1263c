//! Shared helpers for client integration tests.

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use verdant_client::api::{ApiConfig, ClientFactory};
use verdant_client::token::MemoryTokenStore;
use wiremock::MockServer;

/// Build a factory pointed at the mock server with the given store.
pub fn factory_for(server: &MockServer, store: Arc<MemoryTokenStore>) -> ClientFactory {
    let config = ApiConfig::new(server.uri()).expect("mock server uri should parse");
    ClientFactory::new(config, store)
}

/// Build a factory with a store pre-seeded with `token`.
pub fn authenticated_factory(server: &MockServer, token: &str) -> ClientFactory {
    factory_for(server, Arc::new(MemoryTokenStore::with_token(token)))
}

/// Build an unsigned JWT whose `exp` claim is `offset_secs` from now.
///
/// Negative offsets produce the expired-token fixture.
pub fn make_jwt(offset_secs: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let exp = Utc::now().timestamp() + offset_secs;
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"user1","exp":{exp}}}"#).as_bytes());
    format!("{header}.{payload}.test-signature")
}
