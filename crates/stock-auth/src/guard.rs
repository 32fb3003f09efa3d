//! Route guard: the pure access decision made before rendering any page.
//!
//! No retries and no I/O — one synchronous decision per render over the
//! current session state.

use crate::session::{Session, SessionState};

/// Access requirement of a guarded surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Any authenticated account.
    Authenticated,
    /// Admin accounts only.
    AdminOnly,
}

/// What the guard tells the caller to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the guarded content.
    Allow,
    /// No token — send the visitor to the login surface.
    RedirectLogin,
    /// Role constraint unmet — send to the default authorized page (items).
    RedirectDefault,
    /// Token present but identity still unresolved — transient loading state.
    Loading,
}

/// Evaluate `policy` against the current `session`.
#[must_use]
pub fn guard(policy: AccessPolicy, session: &Session) -> GuardDecision {
    if !session.has_token() {
        return GuardDecision::RedirectLogin;
    }

    // Role check precedes the loading state: an unresolved identity has no
    // role, so admin surfaces bounce it to the default page rather than
    // holding a spinner they may never be entitled to.
    if policy == AccessPolicy::AdminOnly && !session.is_admin() {
        return GuardDecision::RedirectDefault;
    }

    if session.state() != SessionState::Authenticated {
        return GuardDecision::Loading;
    }

    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;

    use super::{AccessPolicy, GuardDecision, guard};
    use crate::claims::test_support::make_jwt;
    use crate::session::Session;
    use crate::token_store::{StoredToken, TokenSource};

    fn restored(jwt: String) -> Session {
        let (session, _) = Session::from_stored(
            Some(StoredToken {
                token: jwt,
                source: TokenSource::Keyring,
            }),
            Utc::now(),
        );
        session
    }

    fn session_with_role(role: &str) -> Session {
        let now = Utc::now();
        let mut session = restored(make_jwt("who@example.com", None, now.timestamp() + 600));
        // Resolve identity without a network round trip.
        session.adopt_identity_for_tests(role);
        session
    }

    #[rstest]
    #[case(AccessPolicy::Authenticated)]
    #[case(AccessPolicy::AdminOnly)]
    fn no_token_always_redirects_to_login(#[case] policy: AccessPolicy) {
        let session = Session::anonymous();
        assert_eq!(guard(policy, &session), GuardDecision::RedirectLogin);
    }

    #[rstest]
    #[case("viewer", GuardDecision::RedirectDefault)]
    #[case("manager", GuardDecision::RedirectDefault)]
    #[case("admin", GuardDecision::Allow)]
    fn admin_only_bounces_every_non_admin(#[case] role: &str, #[case] want: GuardDecision) {
        let session = session_with_role(role);
        assert_eq!(guard(AccessPolicy::AdminOnly, &session), want);
    }

    #[rstest]
    #[case("viewer")]
    #[case("manager")]
    #[case("admin")]
    fn any_resolved_identity_passes_plain_guard(#[case] role: &str) {
        let session = session_with_role(role);
        assert_eq!(
            guard(AccessPolicy::Authenticated, &session),
            GuardDecision::Allow
        );
    }

    #[test]
    fn unresolved_identity_is_loading_for_plain_routes() {
        let now = Utc::now();
        let session = restored(make_jwt("who@example.com", Some("admin"), now.timestamp() + 600));

        assert_eq!(
            guard(AccessPolicy::Authenticated, &session),
            GuardDecision::Loading
        );
        // The unverified admin claim in the token does not open admin routes.
        assert_eq!(
            guard(AccessPolicy::AdminOnly, &session),
            GuardDecision::RedirectDefault
        );
    }
}
