//! Clear Text Password
//!
//! Holds a password collected from the host for the duration of one
//! `login` call.
//!
//! ## Security Features
//! - Zeroization of sensitive data on drop
//! - Redacted `Debug` output
//! - Optional constant-time comparison
//!
//! No normalization is applied: the password is compared byte-for-byte
//! exactly as the host supplied it.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::constant_time_eq;

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("woodst0ck".to_string());
/// assert!(password.matches("woodst0ck"));
/// assert!(!password.matches("Woodst0ck"));
/// // Password is automatically zeroized when dropped
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a password as entered
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// An empty password (the callback returned nothing)
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Get the password as bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Byte-exact comparison
    ///
    /// Short-circuits on the first differing byte.
    pub fn matches(&self, expected: &str) -> bool {
        self.0 == expected
    }

    /// Byte-exact comparison in constant time (for equal lengths)
    pub fn matches_constant_time(&self, expected: &str) -> bool {
        constant_time_eq(self.as_bytes(), expected.as_bytes())
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

impl From<String> for ClearTextPassword {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for ClearTextPassword {
    fn from(raw: &str) -> Self {
        Self::new(raw.to_owned())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_exact() {
        let password = ClearTextPassword::new("woodst0ck".to_string());
        assert!(password.matches("woodst0ck"));
        assert!(!password.matches("woodstock"));
        assert!(!password.matches("woodst0ck "));
        assert!(!password.matches("WOODST0CK"));
    }

    #[test]
    fn test_no_unicode_normalization() {
        // "ﬁ" (U+FB01) would become "fi" under NFKC
        let password = ClearTextPassword::new("\u{FB01}".to_string());
        assert!(!password.matches("fi"));
        assert!(password.matches("\u{FB01}"));
    }

    #[test]
    fn test_constant_time_agrees_with_exact() {
        let candidates = ["woodst0ck", "woodstock", "", "woodst0ck!", "w"];
        for candidate in candidates {
            let password = ClearTextPassword::from(candidate);
            assert_eq!(
                password.matches("woodst0ck"),
                password.matches_constant_time("woodst0ck"),
                "disagreement for {candidate:?}"
            );
        }
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = ClearTextPassword::new("woodst0ck".to_string());
        let debug = format!("{:?}", password);
        assert!(!debug.contains("woodst0ck"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_empty() {
        assert!(ClearTextPassword::empty().is_empty());
        assert!(!ClearTextPassword::from("x").is_empty());
    }
}
