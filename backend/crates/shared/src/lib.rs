//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! login module crates and the demo host:
//! - Common error types and result aliases
//! - Typed ID wrappers (login attempt IDs)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
