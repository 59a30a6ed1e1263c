//! Authentication flow integration tests: login seeds the token store,
//! profile fetches pass payloads through untouched, and credential changes
//! rebuild clients.

use std::sync::Arc;

use verdant_client::services::{PlantService, UserService};
use verdant_client::token::{self, MemoryTokenStore, TokenStore};
use verdant_domain::{RegisterRequest, UserProfile, VerdantError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

#[tokio::test]
async fn login_returns_token_and_user_and_seeds_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({"username": "grower", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "jwt-fresh",
            "user": {"id": "u1", "username": "grower", "role": "client"}
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let factory = support::factory_for(&server, store.clone());
    let mut users = UserService::new(&factory).unwrap();
    assert!(!users.is_authenticated());

    let response = users.login("grower", "hunter2").await.unwrap();

    assert_eq!(response.token, "jwt-fresh");
    assert_eq!(response.user.username, "grower");
    assert_eq!(store.get().unwrap().as_deref(), Some("jwt-fresh"));
    assert!(users.is_authenticated());
}

#[tokio::test]
async fn rejected_login_is_an_auth_error_and_leaves_store_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let factory = support::factory_for(&server, store.clone());
    let mut users = UserService::new(&factory).unwrap();

    let err = users.login("grower", "wrong").await.unwrap_err();
    match err {
        VerdantError::Auth(msg) => assert!(msg.contains("bad credentials")),
        other => panic!("expected auth error, got {other:?}"),
    }
    assert_eq!(store.get().unwrap(), None);
    assert!(!users.is_authenticated());
}

#[tokio::test]
async fn register_has_no_token_side_effect() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"id": "u2", "username": "newgrower", "role": "client"}),
        ))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let factory = support::factory_for(&server, store.clone());
    let users = UserService::new(&factory).unwrap();

    let request = RegisterRequest {
        username: "newgrower".to_string(),
        email: "new@verdant.example".to_string(),
        password: "hunter2".to_string(),
        phone_number: None,
    };
    let user = users.register(&request).await.unwrap();

    assert_eq!(user.id, "u2");
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn my_profile_is_an_identity_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("Authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"id": "client123", "phoneNumber": "+79991234567"}),
        ))
        .mount(&server)
        .await;

    let factory = support::authenticated_factory(&server, "session-token");
    let users = UserService::new(&factory).unwrap();

    let profile = users.my_profile().await.unwrap();
    let expected = UserProfile {
        id: "client123".to_string(),
        username: None,
        email: None,
        first_name: None,
        last_name: None,
        phone_number: Some("+79991234567".to_string()),
        role: None,
    };
    assert_eq!(profile, expected);
}

#[tokio::test]
async fn my_profile_without_login_fails_before_any_request() {
    let server = MockServer::start().await;

    let factory = support::factory_for(&server, Arc::new(MemoryTokenStore::new()));
    let users = UserService::new(&factory).unwrap();

    let err = users.my_profile().await.unwrap_err();
    assert!(matches!(err, VerdantError::Auth(_)));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn logout_clears_store_and_deauthenticates() {
    let server = MockServer::start().await;

    let store = Arc::new(MemoryTokenStore::with_token("session-token"));
    let factory = support::factory_for(&server, store.clone());
    let mut users = UserService::new(&factory).unwrap();
    assert!(users.is_authenticated());

    users.logout().unwrap();

    assert_eq!(store.get().unwrap(), None);
    assert!(!users.is_authenticated());
    assert!(matches!(users.my_profile().await, Err(VerdantError::Auth(_))));
}

#[tokio::test]
async fn facade_built_after_token_change_carries_the_new_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plants"))
        .and(header("Authorization", "Bearer old-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plants"))
        .and(header("Authorization", "Bearer new-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("old-token"));
    let factory = support::factory_for(&server, store.clone());

    // Built with the old token; keeps it even after the store changes.
    let old_plants = PlantService::new(&factory).unwrap();
    old_plants.list().await.unwrap();

    store.set("new-token").unwrap();

    // A façade built now reads the fresh token from the store.
    let new_plants = PlantService::new(&factory).unwrap();
    new_plants.list().await.unwrap();
}

#[test]
fn valid_and_expired_token_fixtures_behave() {
    let valid = support::make_jwt(3600);
    let expired = support::make_jwt(-3600);

    assert!(!token::is_expired(&valid));
    assert!(token::is_expired(&expired));
}
