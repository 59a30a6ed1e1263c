//! User and authentication types
//!
//! Request/response pairs for the authentication handshake plus the profile
//! record returned by the authenticated "me" endpoint.

use serde::{Deserialize, Serialize};

/// User profile returned by the authenticated "me" endpoint
///
/// Only `id` is guaranteed by the server; everything else depends on how
/// complete the account is. The client passes the record through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Server-side role name ("client", "employee", "administrator")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Authenticated user identity carried in the login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the bearer token that seeds the token store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Payload for account registration
///
/// Registration has no token side effect; the caller logs in afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_profile_round_trips() {
        // The "me" endpoint may return a minimal record; unknown-to-us
        // optional fields must come back exactly as sent.
        let json = r#"{"id":"client123","phoneNumber":"+79991234567"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.id, "client123");
        assert_eq!(profile.phone_number.as_deref(), Some("+79991234567"));
        assert!(profile.email.is_none());

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back, serde_json::json!({"id": "client123", "phoneNumber": "+79991234567"}));
    }

    #[test]
    fn login_response_carries_token_and_user() {
        let json = r#"{"token":"jwt-abc","user":{"id":"u1","username":"grower","role":"client"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token, "jwt-abc");
        assert_eq!(response.user.username, "grower");
        assert_eq!(response.user.role.as_deref(), Some("client"));
    }
}
