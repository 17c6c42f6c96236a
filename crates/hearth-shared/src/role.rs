//! The single authorization predicate.
//!
//! Every role check in the workspace goes through [`can_access`] so the
//! gate, the views, and individual action buttons cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Access level a view or operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Any authenticated account.
    Member,
    /// Accounts with the admin flag set.
    Admin,
}

/// Whether `user` satisfies `required`.
///
/// `None` (not authenticated) satisfies nothing.  Admins satisfy both roles.
pub fn can_access(user: Option<&User>, required: Role) -> bool {
    match (user, required) {
        (None, _) => false,
        (Some(_), Role::Member) => true,
        (Some(u), Role::Admin) => u.is_admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

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

    #[test]
    fn anonymous_satisfies_nothing() {
        assert!(!can_access(None, Role::Member));
        assert!(!can_access(None, Role::Admin));
    }

    #[test]
    fn member_satisfies_member_only() {
        let u = user(false);
        assert!(can_access(Some(&u), Role::Member));
        assert!(!can_access(Some(&u), Role::Admin));
    }

    #[test]
    fn admin_satisfies_both() {
        let u = user(true);
        assert!(can_access(Some(&u), Role::Member));
        assert!(can_access(Some(&u), Role::Admin));
    }
}
