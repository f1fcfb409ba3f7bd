//! Identity seam.
//!
//! The identity collaborator tells the synchronizer who is logged in.
//! The user's email doubles as the cart document key, so every cart
//! operation starts by asking for it.

use serde::{Deserialize, Serialize};
use trolley_core::ids::UserId;

/// The current user as reported by the identity collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum User {
    /// Nobody is logged in.
    Anonymous,
    /// Authenticated user.
    Authenticated {
        /// User ID.
        id: UserId,
        /// Email address; used as the cart document key.
        email: String,
        /// Display name.
        name: Option<String>,
    },
}

impl User {
    /// Create an authenticated user.
    pub fn authenticated(id: UserId, email: impl Into<String>, name: Option<String>) -> Self {
        User::Authenticated {
            id,
            email: email.into(),
            name,
        }
    }

    /// Check if the user is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, User::Authenticated { .. })
    }

    /// Get the email if authenticated.
    pub fn email(&self) -> Option<&str> {
        match self {
            User::Authenticated { email, .. } => Some(email),
            User::Anonymous => None,
        }
    }

    /// Get the user ID if authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            User::Authenticated { id, .. } => Some(id),
            User::Anonymous => None,
        }
    }
}

/// Supplies the currently authenticated user.
pub trait IdentityProvider: Send + Sync {
    /// The current user at the moment of the call.
    fn current_user(&self) -> User;
}

/// Identity provider pinned to a single user.
///
/// Useful for tests and for applications that resolve identity once
/// at startup.
#[derive(Debug, Clone)]
pub struct FixedIdentity {
    user: User,
}

impl FixedIdentity {
    /// Provider that always reports the given user.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Provider with nobody logged in.
    pub fn anonymous() -> Self {
        Self {
            user: User::Anonymous,
        }
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> User {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_user() {
        let user = User::Anonymous;
        assert!(!user.is_authenticated());
        assert!(user.email().is_none());
        assert!(user.user_id().is_none());
    }

    #[test]
    fn test_authenticated_user() {
        let user = User::authenticated(UserId::new("user-1"), "a@example.com", None);
        assert!(user.is_authenticated());
        assert_eq!(user.email(), Some("a@example.com"));
        assert_eq!(user.user_id().unwrap().as_str(), "user-1");
    }

    #[test]
    fn test_fixed_identity() {
        let identity = FixedIdentity::new(User::authenticated(
            UserId::new("user-1"),
            "a@example.com",
            Some("Ada".to_string()),
        ));
        assert_eq!(identity.current_user().email(), Some("a@example.com"));

        let nobody = FixedIdentity::anonymous();
        assert!(!nobody.current_user().is_authenticated());
    }
}
