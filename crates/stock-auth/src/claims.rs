use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use stock_core::enums::Role;

use crate::error::AuthError;

/// Claims the console reads out of the bearer token.
///
/// Decoded from the JWT payload segment WITHOUT signature verification —
/// the backend is the verifier; the console only needs `exp` for the expiry
/// countdown and `sub`/`role` for display before `/users/me` answers.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Subject — the account email.
    pub sub: String,
    /// Role hint baked into the token. The `/users/me` response remains the
    /// authority.
    #[serde(default)]
    pub role: Option<Role>,
    /// Expiration as a Unix timestamp (`exp` claim).
    pub exp: i64,
}

impl TokenClaims {
    /// Decode the payload segment of `jwt`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenDecode` if the JWT format, base64, or JSON
    /// is invalid, or the `exp`/`sub` claims are missing.
    pub fn decode(jwt: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = jwt.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::TokenDecode("invalid JWT format".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| AuthError::TokenDecode(format!("base64 decode failed: {e}")))?;
        serde_json::from_slice(&payload)
            .map_err(|e| AuthError::TokenDecode(format!("JSON parse failed: {e}")))
    }

    /// Expiration instant, when `exp` is representable.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Seconds until expiry at `now`, clamped at 0.
    #[must_use]
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        (self.exp - now.timestamp()).max(0)
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.remaining_secs(now) == 0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use base64::Engine as _;

    /// Build an unsigned fixture JWT with the given claims.
    pub(crate) fn make_jwt(sub: &str, role: Option<&str>, exp: i64) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"HS256"}"#);
        let payload = match role {
            Some(role) => {
                engine.encode(format!(r#"{{"sub":"{sub}","role":"{role}","exp":{exp}}}"#))
            }
            None => engine.encode(format!(r#"{{"sub":"{sub}","exp":{exp}}}"#)),
        };
        let signature = engine.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::make_jwt;
    use super::*;

    #[test]
    fn decode_reads_sub_role_and_exp() {
        let exp = Utc::now().timestamp() + 1800;
        let claims =
            TokenClaims::decode(&make_jwt("ops@example.com", Some("manager"), exp)).expect("decode");
        assert_eq!(claims.sub, "ops@example.com");
        assert_eq!(claims.role, Some(Role::Manager));
        assert_eq!(claims.exp, exp);
    }

    #[test]
    fn decode_tolerates_missing_role() {
        let claims = TokenClaims::decode(&make_jwt("a@b.c", None, 10)).expect("decode");
        assert_eq!(claims.role, None);
    }

    #[test]
    fn decode_rejects_malformed_tokens() {
        assert!(TokenClaims::decode("not-a-jwt").is_err());
        assert!(TokenClaims::decode("a.!!!.c").is_err());

        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let no_exp = format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256"}"#),
            engine.encode(r#"{"sub":"a@b.c"}"#),
            engine.encode("sig")
        );
        assert!(TokenClaims::decode(&no_exp).is_err());
    }

    #[test]
    fn remaining_counts_down_and_clamps_at_zero() {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "a@b.c".into(),
            role: None,
            exp: now.timestamp() + 90,
        };
        assert_eq!(claims.remaining_secs(now), 90);
        assert_eq!(claims.remaining_secs(now + chrono::TimeDelta::seconds(90)), 0);
        assert_eq!(
            claims.remaining_secs(now + chrono::TimeDelta::seconds(500)),
            0
        );
        assert!(!claims.is_expired(now));
        assert!(claims.is_expired(now + chrono::TimeDelta::seconds(91)));
    }
}
