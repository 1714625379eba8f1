//! Credential-Collection Callbacks
//!
//! A login module never talks to the user directly. It builds a list of
//! [`Callback`]s describing what it needs and hands them to the host's
//! [`CallbackHandler`], which fills in the responses however it likes
//! (console, GUI, preset values).
//!
//! ## Usage
//! ```rust
//! use platform::callback::{Callback, CallbackHandler, NameCallback, PasswordCallback, StaticCallbackHandler};
//!
//! let mut handler = StaticCallbackHandler::new("snoopy", "woodst0ck");
//! let mut callbacks = [
//!     Callback::Name(NameCallback::new("username")),
//!     Callback::Password(PasswordCallback::new("password", false)),
//! ];
//! handler.handle(&mut callbacks).unwrap();
//! ```

use std::fmt;
use std::io;

use thiserror::Error;

use crate::password::ClearTextPassword;

// ============================================================================
// Error Types
// ============================================================================

/// Errors a callback handler may report
#[derive(Debug, Error)]
pub enum CallbackError {
    /// Reading or writing the interaction channel failed
    #[error("Callback I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The handler does not know how to answer this callback
    #[error("Unsupported callback: {prompt}")]
    Unsupported { prompt: String },
}

impl CallbackError {
    /// Build an `Unsupported` error for the given callback
    pub fn unsupported(callback: &Callback) -> Self {
        CallbackError::Unsupported {
            prompt: callback.prompt().to_owned(),
        }
    }
}

// ============================================================================
// Callbacks
// ============================================================================

/// Request for a user name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCallback {
    prompt: String,
    default_name: Option<String>,
    name: Option<String>,
}

impl NameCallback {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default_name: None,
            name: None,
        }
    }

    pub fn with_default(mut self, default_name: impl Into<String>) -> Self {
        self.default_name = Some(default_name.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }

    /// The name filled in by the handler, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}

/// Request for a secret
pub struct PasswordCallback {
    prompt: String,
    echo_on: bool,
    password: Option<ClearTextPassword>,
}

impl PasswordCallback {
    /// `echo_on = false` asks the handler not to display the input
    pub fn new(prompt: impl Into<String>, echo_on: bool) -> Self {
        Self {
            prompt: prompt.into(),
            echo_on,
            password: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_echo_on(&self) -> bool {
        self.echo_on
    }

    /// The password filled in by the handler, if any
    pub fn password(&self) -> Option<&ClearTextPassword> {
        self.password.as_ref()
    }

    pub fn set_password(&mut self, password: ClearTextPassword) {
        self.password = Some(password);
    }

    /// Take ownership of the password, leaving the callback empty
    pub fn take_password(&mut self) -> Option<ClearTextPassword> {
        self.password.take()
    }
}

impl fmt::Debug for PasswordCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCallback")
            .field("prompt", &self.prompt)
            .field("echo_on", &self.echo_on)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Severity of an informational message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Information,
    Warning,
    Error,
}

/// Informational message for the user; no response expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutputCallback {
    message_type: MessageType,
    message: String,
}

impl TextOutputCallback {
    pub fn new(message_type: MessageType, message: impl Into<String>) -> Self {
        Self {
            message_type,
            message: message.into(),
        }
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One item of a credential-collection exchange
#[derive(Debug)]
pub enum Callback {
    Name(NameCallback),
    Password(PasswordCallback),
    TextOutput(TextOutputCallback),
}

impl Callback {
    /// Prompt (or message) text shown to the user
    pub fn prompt(&self) -> &str {
        match self {
            Callback::Name(cb) => cb.prompt(),
            Callback::Password(cb) => cb.prompt(),
            Callback::TextOutput(cb) => cb.message(),
        }
    }
}

// ============================================================================
// Handler contract
// ============================================================================

/// Host-provided mechanism for answering callbacks
///
/// Implementations fill in every callback they understand and return
/// [`CallbackError::Unsupported`] for the first one they do not. The call
/// is synchronous and may block for as long as the user takes.
pub trait CallbackHandler {
    fn handle(&mut self, callbacks: &mut [Callback]) -> Result<(), CallbackError>;
}

impl<H: CallbackHandler + ?Sized> CallbackHandler for Box<H> {
    fn handle(&mut self, callbacks: &mut [Callback]) -> Result<(), CallbackError> {
        (**self).handle(callbacks)
    }
}

// ============================================================================
// Static handler
// ============================================================================

/// Answers name and password callbacks from preset values
///
/// Useful for non-interactive hosts and tests. Text output is ignored.
pub struct StaticCallbackHandler {
    username: String,
    password: String,
}

impl StaticCallbackHandler {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for StaticCallbackHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCallbackHandler")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Drop for StaticCallbackHandler {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.password.zeroize();
    }
}

impl CallbackHandler for StaticCallbackHandler {
    fn handle(&mut self, callbacks: &mut [Callback]) -> Result<(), CallbackError> {
        for callback in callbacks.iter_mut() {
            match callback {
                Callback::Name(cb) => cb.set_name(self.username.clone()),
                Callback::Password(cb) => {
                    cb.set_password(ClearTextPassword::new(self.password.clone()))
                }
                Callback::TextOutput(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential_callbacks() -> [Callback; 2] {
        [
            Callback::Name(NameCallback::new("username")),
            Callback::Password(PasswordCallback::new("password", false)),
        ]
    }

    #[test]
    fn test_static_handler_fills_both() {
        let mut handler = StaticCallbackHandler::new("snoopy", "woodst0ck");
        let mut callbacks = credential_callbacks();
        handler.handle(&mut callbacks).unwrap();

        match &callbacks[0] {
            Callback::Name(cb) => assert_eq!(cb.name(), Some("snoopy")),
            other => panic!("unexpected callback {other:?}"),
        }
        match &callbacks[1] {
            Callback::Password(cb) => {
                assert!(cb.password().unwrap().matches("woodst0ck"));
                assert!(!cb.is_echo_on());
            }
            other => panic!("unexpected callback {other:?}"),
        }
    }

    #[test]
    fn test_static_handler_ignores_text_output() {
        let mut handler = StaticCallbackHandler::new("a", "b");
        let mut callbacks = [Callback::TextOutput(TextOutputCallback::new(
            MessageType::Information,
            "hello",
        ))];
        assert!(handler.handle(&mut callbacks).is_ok());
    }

    #[test]
    fn test_boxed_handler_delegates() {
        let mut handler: Box<dyn CallbackHandler> =
            Box::new(StaticCallbackHandler::new("snoopy", "x"));
        let mut callbacks = credential_callbacks();
        handler.handle(&mut callbacks).unwrap();
        assert_eq!(callbacks[0].prompt(), "username");
        match &callbacks[0] {
            Callback::Name(cb) => assert_eq!(cb.name(), Some("snoopy")),
            other => panic!("unexpected callback {other:?}"),
        }
    }

    #[test]
    fn test_password_callback_debug_is_redacted() {
        let mut cb = PasswordCallback::new("password", false);
        cb.set_password(ClearTextPassword::from("woodst0ck"));
        let debug = format!("{:?}", cb);
        assert!(!debug.contains("woodst0ck"));

        let taken = cb.take_password();
        assert!(taken.is_some());
        assert!(cb.password().is_none());
    }

    #[test]
    fn test_name_callback_default() {
        let cb = NameCallback::new("username").with_default("guest");
        assert_eq!(cb.default_name(), Some("guest"));
        assert_eq!(cb.name(), None);
    }

    #[test]
    fn test_unsupported_error_names_prompt() {
        let cb = Callback::TextOutput(TextOutputCallback::new(MessageType::Warning, "careful"));
        let err = CallbackError::unsupported(&cb);
        assert_eq!(err.to_string(), "Unsupported callback: careful");
    }
}
