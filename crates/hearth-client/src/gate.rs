//! The access gate: may a view render for this session?
//!
//! A pure function of the session snapshot -- no network, no clock, no
//! side effects -- so the same snapshot always yields the same decision.

use hearth_shared::{can_access, Role};

use crate::session::Session;

/// What the embedding shell should do with a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session resolution is still in flight: render a neutral waiting
    /// state, never the protected content and never the login view.
    Wait,
    /// Not authenticated: go to the login view.
    RedirectToLogin,
    /// Authenticated but not authorized for this view: go to the default
    /// view, not the login view.
    RedirectToDefault,
    /// Render the view.
    Allow,
}

/// Decide whether a view requiring `required` may render under `session`.
pub fn evaluate(session: &Session, required: Role) -> GateDecision {
    if session.loading {
        return GateDecision::Wait;
    }

    match &session.user {
        None => GateDecision::RedirectToLogin,
        Some(user) => {
            if can_access(Some(user), required) {
                GateDecision::Allow
            } else {
                GateDecision::RedirectToDefault
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hearth_shared::User;

    fn user(is_admin: bool) -> User {
        User {
            id: 1,
            username: "alice".into(),
            email: None,
            full_name: None,
            is_admin,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn session(user: Option<User>, loading: bool) -> Session {
        Session { user, loading }
    }

    #[test]
    fn loading_always_waits() {
        // Even a populated user must not render while loading; the snapshot
        // is not settled yet.
        let s = session(Some(user(true)), true);
        assert_eq!(evaluate(&s, Role::Member), GateDecision::Wait);
        assert_eq!(evaluate(&s, Role::Admin), GateDecision::Wait);
    }

    #[test]
    fn anonymous_goes_to_login() {
        let s = session(None, false);
        assert_eq!(evaluate(&s, Role::Member), GateDecision::RedirectToLogin);
        assert_eq!(evaluate(&s, Role::Admin), GateDecision::RedirectToLogin);
    }

    #[test]
    fn member_renders_member_views_only() {
        let s = session(Some(user(false)), false);
        assert_eq!(evaluate(&s, Role::Member), GateDecision::Allow);
        // Unauthorized, not unauthenticated: default view, not login.
        assert_eq!(evaluate(&s, Role::Admin), GateDecision::RedirectToDefault);
    }

    #[test]
    fn admin_renders_everything() {
        let s = session(Some(user(true)), false);
        assert_eq!(evaluate(&s, Role::Member), GateDecision::Allow);
        assert_eq!(evaluate(&s, Role::Admin), GateDecision::Allow);
    }

    #[test]
    fn decision_is_deterministic() {
        let s = session(Some(user(false)), false);
        let first = evaluate(&s, Role::Admin);
        for _ in 0..10 {
            assert_eq!(evaluate(&s, Role::Admin), first);
        }
    }
}
