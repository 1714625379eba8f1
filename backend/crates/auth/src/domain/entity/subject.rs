//! Subject Entity
//!
//! The session principal set: everything an authenticated subject "is".
//! Owned by the host and handed to login modules as a cloneable handle;
//! modules append to it during `commit`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::value_object::principal::{Principal, RolePrincipal, UserPrincipal};

/// Shared handle to a subject's principal set
///
/// Clones refer to the same set. Principals are kept in insertion order and
/// duplicates are retained: every append is recorded.
#[derive(Debug, Clone, Default)]
pub struct Subject {
    principals: Arc<Mutex<Vec<Principal>>>,
}

impl Subject {
    /// Create an empty subject
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Principal>> {
        // A panic while holding the lock cannot leave a Vec half-pushed
        self.principals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Append principals in order
    pub fn add_all<I>(&self, principals: I)
    where
        I: IntoIterator,
        I::Item: Into<Principal>,
    {
        let mut set = self.lock();
        set.extend(principals.into_iter().map(Into::into));
    }

    /// Snapshot of every principal
    pub fn principals(&self) -> Vec<Principal> {
        self.lock().clone()
    }

    /// Snapshot of the user principals
    pub fn user_principals(&self) -> Vec<UserPrincipal> {
        self.lock().iter().filter_map(Principal::as_user).cloned().collect()
    }

    /// Snapshot of the role principals
    pub fn role_principals(&self) -> Vec<RolePrincipal> {
        self.lock().iter().filter_map(Principal::as_role).cloned().collect()
    }

    pub fn contains(&self, principal: &Principal) -> bool {
        self.lock().contains(principal)
    }

    /// Number of times `principal` was appended
    pub fn count(&self, principal: &Principal) -> usize {
        self.lock().iter().filter(|p| *p == principal).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether two handles refer to the same set
    pub fn same_as(&self, other: &Subject) -> bool {
        Arc::ptr_eq(&self.principals, &other.principals)
    }
}
