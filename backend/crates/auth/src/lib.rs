//! Simple Login Module
//!
//! A demonstration plugin for a pluggable authentication framework.
//!
//! Structure:
//! - `domain/` - Principals, the subject's principal set, the `LoginModule` trait
//! - `application/` - `SimpleLoginModule` and its options
//!
//! ## Features
//! - One hardcoded credential pair (`snoopy` / `woodst0ck`)
//! - Fixed roles granted on commit (`RedBaron`, `JoeCool`, `MansBestFriend`)
//! - Credentials collected through the host's callback handler
//!
//! ## Security Model
//! This module is a demo. Credentials are compiled in and compared without
//! hashing. Options:
//! - `debug` - log options and shared-state keys at initialize
//! - `strict_commit` - only grant roles after a successful login
//! - `constant_time_compare` - compare credentials in constant time

pub mod application;
pub mod domain;
pub mod error;


// Re-exports for convenience
pub use application::{LoginState, ModuleOptions, SharedState, SimpleLoginConfig, SimpleLoginModule};
pub use domain::{LoginModule, Principal, RolePrincipal, Subject, UserPrincipal};
pub use error::{AuthError, AuthResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Re-export the callback contract hosts implement
pub mod callback {
    pub use platform::callback::*;
    pub use platform::console::ConsoleCallbackHandler;
}
