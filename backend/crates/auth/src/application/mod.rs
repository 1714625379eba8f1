//! Application Layer
//!
//! Login module implementations and their configuration.

pub mod config;
pub mod simple_login;

// Re-exports
pub use config::{ModuleOptions, SharedState, SimpleLoginConfig};
pub use simple_login::{LoginState, SimpleLoginModule};
