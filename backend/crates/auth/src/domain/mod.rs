//! Domain Layer
//!
//! Contains the subject entity, principal value objects and the
//! login-module trait.

pub mod entity;
pub mod login_module;
pub mod value_object;

// Re-exports
pub use entity::subject::Subject;
pub use login_module::LoginModule;
pub use value_object::principal::{Principal, RolePrincipal, UserPrincipal};
