//! Login Module Trait
//!
//! The lifecycle contract a host drives for each authentication attempt.
//! Implementations live in the application layer.

use platform::callback::CallbackHandler;

use crate::application::config::{ModuleOptions, SharedState};
use crate::domain::entity::subject::Subject;
use crate::error::AuthResult;

/// Pluggable login module
///
/// A host constructs one instance per attempt and calls, in order:
/// `initialize`, `login`, then `commit` on success or `abort` on failure.
/// `logout` discards whatever the module still holds.
///
/// The boolean results follow the host convention: `Ok(true)` means the
/// phase succeeded for this module, `Ok(false)` means the module should be
/// ignored or the attempt failed, and `Err` is reserved for misuse of the
/// lifecycle.
pub trait LoginModule {
    /// Bind the module to a subject, a credential collector, the state
    /// shared with other modules and this module's options
    fn initialize(
        &mut self,
        subject: Subject,
        callback_handler: Box<dyn CallbackHandler>,
        shared_state: SharedState,
        options: ModuleOptions,
    );

    /// Authenticate (phase one)
    fn login(&mut self) -> AuthResult<bool>;

    /// Publish principals to the subject (phase two)
    fn commit(&mut self) -> AuthResult<bool>;

    /// Discard the attempt
    fn abort(&mut self) -> AuthResult<bool>;

    /// Log the subject out
    fn logout(&mut self) -> AuthResult<bool>;
}
