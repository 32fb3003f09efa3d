use chrono::{DateTime, Utc};
use stock_client::{ApiClient, ApiError};
use stock_core::entities::User;
use stock_core::enums::Role;

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::token_store::{StoredToken, TokenSource, TokenStore};

/// Lifecycle phase of the console session.
///
/// ```text
/// anonymous → authenticating → authenticated
///                            → anonymous   (identity fetch failure)
/// authenticated → anonymous                (logout, expiry, 401)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated,
}

impl SessionState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Anonymous => &[Self::Authenticating],
            Self::Authenticating => &[Self::Authenticated, Self::Anonymous],
            Self::Authenticated => &[Self::Anonymous],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Authenticating => "authenticating",
            Self::Authenticated => "authenticated",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The console's view of who is logged in.
///
/// Owned by the application context and passed explicitly into command
/// handlers — there is no ambient global. The identity (`user`) is only set
/// after the token has been accepted by `/users/me`; until then the session
/// reports no role and the guard treats admin surfaces accordingly.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    token: Option<String>,
    token_source: Option<TokenSource>,
    claims: Option<TokenClaims>,
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            state: SessionState::Anonymous,
            token: None,
            token_source: None,
            claims: None,
            user: None,
        }
    }

    /// Rebuild session state from the persisted token, if any.
    ///
    /// An expired or undecodable persisted token is cleared from storage and
    /// yields an anonymous session; a live one yields `Authenticating` until
    /// the identity is fetched.
    #[must_use]
    pub fn restore() -> Self {
        let store = TokenStore::from_env();
        let (session, stale) = Self::from_stored(store.load(), Utc::now());
        if stale {
            if let Err(error) = store.clear() {
                tracing::warn!(%error, "failed to clear stale credentials");
            }
        }
        session
    }

    /// Pure part of [`Session::restore`]: classify a candidate token.
    /// Returns the session and whether persisted storage should be cleared.
    pub(crate) fn from_stored(stored: Option<StoredToken>, now: DateTime<Utc>) -> (Self, bool) {
        let Some(StoredToken { token, source }) = stored else {
            return (Self::anonymous(), false);
        };

        match TokenClaims::decode(&token) {
            Ok(claims) if !claims.is_expired(now) => (
                Self {
                    state: SessionState::Authenticating,
                    token: Some(token),
                    token_source: Some(source),
                    claims: Some(claims),
                    user: None,
                },
                false,
            ),
            Ok(_) => {
                tracing::info!("persisted token has expired");
                (Self::anonymous(), true)
            }
            Err(error) => {
                tracing::warn!(%error, "persisted token is not a decodable JWT");
                (Self::anonymous(), true)
            }
        }
    }

    /// Authenticate against the backend and persist the token.
    ///
    /// On success the session is `Authenticated` with the fetched identity
    /// and `client` carries the bearer token. An identity-fetch failure
    /// rolls everything back to anonymous before returning the error.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidCredentials` when the backend rejects the login;
    /// otherwise the underlying [`ApiError`].
    pub async fn login(
        &mut self,
        client: &mut ApiClient,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        self.state = SessionState::Authenticating;
        self.user = None;

        let token = match client.login(email, password).await {
            Ok(token) => token,
            Err(ApiError::Unauthorized { .. }) => {
                self.clear(client);
                return Err(AuthError::InvalidCredentials);
            }
            Err(error) => {
                self.clear(client);
                return Err(error.into());
            }
        };

        match TokenStore::from_env().save(&token) {
            Ok(source) => self.token_source = Some(source),
            Err(error) => {
                tracing::warn!(%error, "could not persist token; session will not survive this process");
            }
        }

        self.claims = match TokenClaims::decode(&token) {
            Ok(claims) => Some(claims),
            Err(error) => {
                tracing::warn!(%error, "token claims not decodable; expiry countdown unavailable");
                None
            }
        };
        client.set_token(Some(token.clone()));
        self.token = Some(token);

        match client.me().await {
            Ok(user) => {
                self.user = Some(user);
                self.state = SessionState::Authenticated;
                Ok(())
            }
            Err(error) => {
                self.logout(client);
                Err(error.into())
            }
        }
    }

    /// Fetch the identity for a restored (`Authenticating`) session.
    ///
    /// # Errors
    ///
    /// `AuthError::NotAuthenticated` without a token; an identity-fetch
    /// failure logs the session out and returns the underlying error.
    pub async fn resolve_identity(&mut self, client: &mut ApiClient) -> Result<(), AuthError> {
        match self.state {
            SessionState::Authenticated => Ok(()),
            SessionState::Anonymous => Err(AuthError::NotAuthenticated),
            SessionState::Authenticating => {
                client.set_token(self.token.clone());
                match client.me().await {
                    Ok(user) => {
                        self.user = Some(user);
                        self.state = SessionState::Authenticated;
                        Ok(())
                    }
                    Err(error) => {
                        self.logout(client);
                        Err(error.into())
                    }
                }
            }
        }
    }

    /// Drop the session and stored credentials unconditionally. Never fails:
    /// storage errors are logged and in-memory state is cleared regardless.
    pub fn logout(&mut self, client: &mut ApiClient) {
        if let Err(error) = TokenStore::from_env().clear() {
            tracing::warn!(%error, "failed to clear stored credentials");
        }
        self.clear(client);
    }

    fn clear(&mut self, client: &mut ApiClient) {
        self.state = SessionState::Anonymous;
        self.token = None;
        self.token_source = None;
        self.claims = None;
        self.user = None;
        client.set_token(None);
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The authenticated role. `None` until the identity has been resolved —
    /// the token's own role claim is only a display hint, never an
    /// authorization source.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_admin)
    }

    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.role().is_some_and(Role::is_manager)
    }

    /// Best-known account email: resolved identity first, token claim as a
    /// fallback while authenticating.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.email.as_str())
            .or_else(|| self.claims.as_ref().map(|claims| claims.sub.as_str()))
    }

    /// Seconds until token expiry at `now`, clamped at 0. `None` when no
    /// decodable token is held.
    #[must_use]
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> Option<i64> {
        self.claims.as_ref().map(|claims| claims.remaining_secs(now))
    }

    /// Storage tier the current token came from. `None` when the token was
    /// never persisted.
    #[must_use]
    pub const fn token_source(&self) -> Option<TokenSource> {
        self.token_source
    }
}

#[cfg(test)]
impl Session {
    /// Mark the session authenticated with a given role, bypassing the
    /// network identity fetch. Test-only.
    pub(crate) fn adopt_identity_for_tests(&mut self, role: &str) {
        let role =
            serde_json::from_value(serde_json::Value::String(role.to_string())).expect("role");
        self.user = Some(User {
            id: 1,
            email: "who@example.com".into(),
            role,
            is_active: true,
        });
        self.state = SessionState::Authenticated;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use pretty_assertions::assert_eq;

    use super::{Session, SessionState};
    use crate::claims::test_support::make_jwt;
    use crate::token_store::{StoredToken, TokenSource};

    fn stored(jwt: String) -> Option<StoredToken> {
        Some(StoredToken {
            token: jwt,
            source: TokenSource::File,
        })
    }

    #[test]
    fn no_token_starts_anonymous() {
        let (session, stale) = Session::from_stored(None, Utc::now());
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(!stale);
        assert!(!session.has_token());
        assert!(!session.is_admin());
        assert!(!session.is_manager());
        assert_eq!(session.token_source(), None);
    }

    #[test]
    fn live_token_starts_authenticating_without_identity() {
        let now = Utc::now();
        let jwt = make_jwt("ops@example.com", Some("admin"), now.timestamp() + 900);

        let (session, stale) = Session::from_stored(stored(jwt), now);
        assert_eq!(session.state(), SessionState::Authenticating);
        assert!(!stale);
        assert!(session.has_token());
        // Identity not yet validated: the admin claim must not grant anything.
        assert_eq!(session.role(), None);
        assert!(!session.is_admin());
        assert_eq!(session.email(), Some("ops@example.com"));
        assert_eq!(session.remaining_secs(now), Some(900));
        assert_eq!(session.token_source(), Some(TokenSource::File));
    }

    #[test]
    fn expired_token_is_discarded_and_flagged_stale() {
        let now = Utc::now();
        let jwt = make_jwt("ops@example.com", None, now.timestamp() - 1);

        let (session, stale) = Session::from_stored(stored(jwt), now);
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(stale);
        assert!(!session.has_token());
    }

    #[test]
    fn undecodable_token_is_discarded_and_flagged_stale() {
        let (session, stale) = Session::from_stored(stored("garbage".into()), Utc::now());
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(stale);
    }

    #[test]
    fn countdown_clamps_at_zero() {
        let now = Utc::now();
        let jwt = make_jwt("a@b.c", None, now.timestamp() + 5);
        let (session, _) = Session::from_stored(stored(jwt), now);

        assert_eq!(session.remaining_secs(now + TimeDelta::seconds(3)), Some(2));
        assert_eq!(session.remaining_secs(now + TimeDelta::seconds(5)), Some(0));
        assert_eq!(session.remaining_secs(now + TimeDelta::minutes(10)), Some(0));
    }

    #[test]
    fn state_machine_edges_match_the_lifecycle() {
        assert_eq!(
            SessionState::Anonymous.allowed_next_states(),
            &[SessionState::Authenticating]
        );
        assert_eq!(
            SessionState::Authenticating.allowed_next_states(),
            &[SessionState::Authenticated, SessionState::Anonymous]
        );
        assert_eq!(
            SessionState::Authenticated.allowed_next_states(),
            &[SessionState::Anonymous]
        );
    }
}
