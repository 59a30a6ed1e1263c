//! Advisory JWT expiry check
//!
//! The API issues JWT bearer tokens whose payload carries a standard `exp`
//! claim. Decoding happens without signature verification: the client has
//! no key material and does not need any, since this check only exists to
//! skip a request that is certain to come back 401. Opaque tokens and JWTs
//! without `exp` are treated as live; the server remains the authority.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};

/// Check whether a bearer token is past its `exp` claim.
///
/// Returns `false` for tokens that are not JWTs or carry no expiry;
/// absence of evidence is not expiry.
#[must_use]
pub fn is_expired(token: &str) -> bool {
    expires_at(token).is_some_and(|exp| exp <= Utc::now())
}

/// Extract the expiry timestamp from a JWT's payload, if present.
#[must_use]
pub fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    Utc.timestamp_opt(exp, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload =
            URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"user1","exp":{exp}}}"#).as_bytes());
        format!("{header}.{payload}.fake-signature")
    }

    #[test]
    fn live_token_is_not_expired() {
        let token = jwt_with_exp(Utc::now().timestamp() + 3600);
        assert!(!is_expired(&token));
        assert!(expires_at(&token).is_some());
    }

    #[test]
    fn stale_token_is_expired() {
        let token = jwt_with_exp(Utc::now().timestamp() - 3600);
        assert!(is_expired(&token));
    }

    #[test]
    fn opaque_token_is_treated_as_live() {
        assert!(!is_expired("not-a-jwt"));
        assert!(expires_at("not-a-jwt").is_none());
    }

    #[test]
    fn jwt_without_exp_claim_is_treated_as_live() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"user1"}"#);
        let token = format!("{header}.{payload}.fake-signature");

        assert!(!is_expired(&token));
        assert!(expires_at(&token).is_none());
    }
}
