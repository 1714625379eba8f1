//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for login modules:
//! - Clear-text password container (zeroized on drop)
//! - Constant-time comparison
//! - Credential-collection callbacks and the handler contract
//! - Console and static callback handlers

pub mod callback;
pub mod console;
pub mod crypto;
pub mod password;
