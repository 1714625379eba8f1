//! Principal Value Objects
//!
//! A principal is a named identity attached to an authenticated subject.
//! Two kinds exist: the user the subject authenticated as, and the roles
//! granted to it. Both are immutable and compare by name.
//!
//! ## Usage
//! ```rust
//! use simple_auth::domain::value_object::principal::{Principal, RolePrincipal, UserPrincipal};
//!
//! let user = UserPrincipal::new("snoopy");
//! let role = RolePrincipal::new("JoeCool");
//!
//! assert_eq!(user.name(), "snoopy");
//! assert_ne!(Principal::from(user), Principal::from(RolePrincipal::new("snoopy")));
//! assert_eq!(role.to_string(), "JoeCool");
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The authenticated user's name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[display("{name}")]
pub struct UserPrincipal {
    name: String,
}

impl UserPrincipal {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A group or role granted to the subject
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[display("{name}")]
pub struct RolePrincipal {
    name: String,
}

impl RolePrincipal {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Any principal that can sit in a subject's principal set
///
/// A user and a role with the same name are different principals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    #[display("user:{_0}")]
    User(UserPrincipal),
    #[display("role:{_0}")]
    Role(RolePrincipal),
}

impl Principal {
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Principal::User(p) => p.name(),
            Principal::Role(p) => p.name(),
        }
    }

    #[inline]
    pub fn is_user(&self) -> bool {
        matches!(self, Principal::User(_))
    }

    #[inline]
    pub fn is_role(&self) -> bool {
        matches!(self, Principal::Role(_))
    }

    pub fn as_user(&self) -> Option<&UserPrincipal> {
        match self {
            Principal::User(p) => Some(p),
            Principal::Role(_) => None,
        }
    }

    pub fn as_role(&self) -> Option<&RolePrincipal> {
        match self {
            Principal::Role(p) => Some(p),
            Principal::User(_) => None,
        }
    }
}

impl From<UserPrincipal> for Principal {
    fn from(p: UserPrincipal) -> Self {
        Principal::User(p)
    }
}

impl From<RolePrincipal> for Principal {
    fn from(p: RolePrincipal) -> Self {
        Principal::Role(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_name() {
        assert_eq!(UserPrincipal::new("snoopy"), UserPrincipal::new("snoopy"));
        assert_ne!(UserPrincipal::new("snoopy"), UserPrincipal::new("Snoopy"));
        assert_eq!(RolePrincipal::new("RedBaron"), RolePrincipal::new("RedBaron"));
    }

    #[test]
    fn test_user_and_role_differ() {
        let user: Principal = UserPrincipal::new("JoeCool").into();
        let role: Principal = RolePrincipal::new("JoeCool").into();
        assert_ne!(user, role);
        assert_eq!(user.name(), role.name());
        assert!(user.is_user());
        assert!(role.is_role());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserPrincipal::new("snoopy").to_string(), "snoopy");
        assert_eq!(
            Principal::from(RolePrincipal::new("MansBestFriend")).to_string(),
            "role:MansBestFriend"
        );
        assert_eq!(
            Principal::from(UserPrincipal::new("snoopy")).to_string(),
            "user:snoopy"
        );
    }

    #[test]
    fn test_accessors() {
        let user: Principal = UserPrincipal::new("snoopy").into();
        assert_eq!(user.as_user().map(UserPrincipal::name), Some("snoopy"));
        assert!(user.as_role().is_none());
    }

    #[test]
    fn test_serialize() {
        let role: Principal = RolePrincipal::new("RedBaron").into();
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "role", "name": "RedBaron"}));
    }
}
