//! Simple Login Module
//!
//! Demonstration login module: accepts exactly one hardcoded credential
//! pair and grants a fixed set of roles.
//!
//! ## Behaviour
//! - `login` asks the host for a user name and a password (echo off) and
//!   compares them byte-for-byte with [`USERNAME`] / [`PASSWORD`]
//! - `commit` grants [`ROLES`] and publishes the pending principals to the
//!   subject, whether or not `login` succeeded, unless the `strict_commit`
//!   option is set
//! - `abort` / `logout` drop the pending principals; the subject is never
//!   rolled back
//!
//! ## Known gaps
//! - The credential check short-circuits unless `constant_time_compare`
//!   is set; no hashing is performed
//! - A repeated `commit` publishes the accumulated pending roles again

use kernel::id::AttemptId;
use platform::callback::{Callback, CallbackHandler, NameCallback, PasswordCallback};
use platform::crypto::constant_time_eq;
use platform::password::ClearTextPassword;

use crate::application::config::{ModuleOptions, SharedState, SimpleLoginConfig};
use crate::domain::entity::subject::Subject;
use crate::domain::login_module::LoginModule;
use crate::domain::value_object::principal::{Principal, RolePrincipal, UserPrincipal};
use crate::error::{AuthError, AuthResult};

/// The only user name accepted
pub const USERNAME: &str = "snoopy";

/// The only password accepted
pub const PASSWORD: &str = "woodst0ck";

/// Roles granted on every commit
pub const ROLES: [&str; 3] = ["RedBaron", "JoeCool", "MansBestFriend"];

const USERNAME_PROMPT: &str = "username";
const PASSWORD_PROMPT: &str = "password";

/// Where the module is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Uninitialized,
    Initialized,
    Authenticated,
    Rejected,
    Committed,
    Aborted,
    LoggedOut,
}

/// Everything bound by `initialize`
struct Binding {
    subject: Subject,
    callback_handler: Box<dyn CallbackHandler>,
    shared_state: SharedState,
    options: ModuleOptions,
}

/// Hardcoded-credential login module
pub struct SimpleLoginModule {
    attempt_id: AttemptId,
    state: LoginState,
    config: SimpleLoginConfig,
    binding: Option<Binding>,
    user_principals: Vec<UserPrincipal>,
    role_principals: Vec<RolePrincipal>,
}

impl Default for SimpleLoginModule {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleLoginModule {
    pub fn new() -> Self {
        Self {
            attempt_id: AttemptId::new(),
            state: LoginState::Uninitialized,
            config: SimpleLoginConfig::default(),
            binding: None,
            user_principals: Vec::new(),
            role_principals: Vec::new(),
        }
    }

    pub fn attempt_id(&self) -> AttemptId {
        self.attempt_id
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    /// Flags read from the options at `initialize`
    pub fn config(&self) -> SimpleLoginConfig {
        self.config
    }

    /// User principals waiting for `commit`
    pub fn pending_users(&self) -> &[UserPrincipal] {
        &self.user_principals
    }

    /// Role principals staged by `commit`
    pub fn pending_roles(&self) -> &[RolePrincipal] {
        &self.role_principals
    }

    pub fn shared_state(&self) -> Option<&SharedState> {
        self.binding.as_ref().map(|b| &b.shared_state)
    }

    pub fn options(&self) -> Option<&ModuleOptions> {
        self.binding.as_ref().map(|b| &b.options)
    }

    fn binding_mut(&mut self) -> AuthResult<&mut Binding> {
        self.binding.as_mut().ok_or(AuthError::NotInitialized)
    }

    fn log_diagnostics(&self, binding: &Binding) {
        tracing::debug!(
            attempt_id = %self.attempt_id,
            count = binding.options.len(),
            "=== Options ==="
        );
        for (name, value) in binding.options.iter() {
            tracing::debug!(attempt_id = %self.attempt_id, option = %name, value = %value, "Option");
        }

        tracing::debug!(
            attempt_id = %self.attempt_id,
            count = binding.shared_state.len(),
            "=== Shared state ==="
        );
        for name in binding.shared_state.keys() {
            // Shared state may carry other modules' credentials
            tracing::debug!(attempt_id = %self.attempt_id, key = %name, "Shared state entry");
        }
    }

    /// Ask the host for a user name and password
    fn collect_credentials(&mut self) -> AuthResult<(String, ClearTextPassword)> {
        let binding = self.binding_mut()?;

        let mut callbacks = [
            Callback::Name(NameCallback::new(USERNAME_PROMPT)),
            Callback::Password(PasswordCallback::new(PASSWORD_PROMPT, false)),
        ];
        binding.callback_handler.handle(&mut callbacks)?;

        let [name_cb, password_cb] = &mut callbacks;
        let username = match name_cb {
            Callback::Name(cb) => cb.name().unwrap_or_default().to_owned(),
            _ => String::new(),
        };
        let password = match password_cb {
            Callback::Password(cb) => cb.take_password().unwrap_or_else(ClearTextPassword::empty),
            _ => ClearTextPassword::empty(),
        };
        Ok((username, password))
    }

    fn credentials_match(&self, username: &str, password: &ClearTextPassword) -> bool {
        if self.config.constant_time_compare {
            let name_ok = constant_time_eq(username.as_bytes(), USERNAME.as_bytes());
            let password_ok = password.matches_constant_time(PASSWORD);
            name_ok & password_ok
        } else {
            username == USERNAME && password.matches(PASSWORD)
        }
    }

    fn clear(&mut self) {
        self.user_principals.clear();
        self.role_principals.clear();
    }
}

impl LoginModule for SimpleLoginModule {
    fn initialize(
        &mut self,
        subject: Subject,
        callback_handler: Box<dyn CallbackHandler>,
        shared_state: SharedState,
        options: ModuleOptions,
    ) {
        self.config = match SimpleLoginConfig::from_options(&options) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    attempt_id = %self.attempt_id,
                    error = %e,
                    "Ignoring malformed module options, using defaults"
                );
                SimpleLoginConfig::default()
            }
        };

        let binding = Binding {
            subject,
            callback_handler,
            shared_state,
            options,
        };
        if self.config.debug {
            self.log_diagnostics(&binding);
        }

        tracing::info!(
            attempt_id = %self.attempt_id,
            options = binding.options.len(),
            strict_commit = self.config.strict_commit,
            "Login module initialized"
        );

        self.binding = Some(binding);
        self.clear();
        self.state = LoginState::Initialized;
    }

    fn login(&mut self) -> AuthResult<bool> {
        let (username, password) = match self.collect_credentials() {
            Ok(credentials) => credentials,
            Err(AuthError::NotInitialized) => return Err(AuthError::NotInitialized),
            Err(e) => {
                e.log();
                self.state = LoginState::Rejected;
                return Ok(false);
            }
        };

        if !self.credentials_match(&username, &password) {
            // Do not reveal which half of the pair was wrong
            tracing::info!(attempt_id = %self.attempt_id, "Login rejected");
            self.state = LoginState::Rejected;
            return Ok(false);
        }

        self.user_principals.push(UserPrincipal::new(USERNAME));
        self.state = LoginState::Authenticated;
        tracing::info!(attempt_id = %self.attempt_id, user = USERNAME, "Login succeeded");
        Ok(true)
    }

    fn commit(&mut self) -> AuthResult<bool> {
        let subject = self
            .binding
            .as_ref()
            .map(|b| b.subject.clone())
            .ok_or(AuthError::NotInitialized)?;

        let authenticated = !self.user_principals.is_empty();
        if !authenticated {
            if self.config.strict_commit {
                tracing::warn!(
                    attempt_id = %self.attempt_id,
                    "Commit refused: no successful login in this cycle"
                );
                return Ok(false);
            }
            tracing::warn!(
                attempt_id = %self.attempt_id,
                "Granting roles without an authenticated user"
            );
        }

        self.role_principals
            .extend(ROLES.iter().copied().map(RolePrincipal::new));

        // One append so other handles never see the user without the roles
        let users = self.user_principals.iter().cloned().map(Principal::from);
        let roles = self.role_principals.iter().cloned().map(Principal::from);
        subject.add_all(users.chain(roles));

        self.state = LoginState::Committed;
        tracing::info!(
            attempt_id = %self.attempt_id,
            users = self.user_principals.len(),
            roles = self.role_principals.len(),
            "Principals committed"
        );
        Ok(true)
    }

    fn abort(&mut self) -> AuthResult<bool> {
        self.clear();
        if self.binding.is_some() {
            self.state = LoginState::Aborted;
        }
        tracing::info!(attempt_id = %self.attempt_id, "Login aborted");
        Ok(true)
    }

    fn logout(&mut self) -> AuthResult<bool> {
        self.clear();
        if self.binding.is_some() {
            self.state = LoginState::LoggedOut;
        }
        tracing::info!(attempt_id = %self.attempt_id, "Logged out");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use platform::callback::StaticCallbackHandler;

    use super::*;

    fn initialized(
        username: &str,
        password: &str,
        options: ModuleOptions,
    ) -> (SimpleLoginModule, Subject) {
        let subject = Subject::new();
        let mut module = SimpleLoginModule::new();
        module.initialize(
            subject.clone(),
            Box::new(StaticCallbackHandler::new(username, password)),
            SharedState::new(),
            options,
        );
        (module, subject)
    }

    #[test]
    fn test_state_transitions() {
        let (mut module, _subject) = initialized(USERNAME, PASSWORD, ModuleOptions::new());
        assert_eq!(module.state(), LoginState::Initialized);

        assert!(module.login().unwrap());
        assert_eq!(module.state(), LoginState::Authenticated);

        assert!(module.commit().unwrap());
        assert_eq!(module.state(), LoginState::Committed);

        assert!(module.logout().unwrap());
        assert_eq!(module.state(), LoginState::LoggedOut);
    }

    #[test]
    fn test_rejected_state() {
        let (mut module, _subject) = initialized(USERNAME, "wrong", ModuleOptions::new());
        assert!(!module.login().unwrap());
        assert_eq!(module.state(), LoginState::Rejected);

        assert!(module.abort().unwrap());
        assert_eq!(module.state(), LoginState::Aborted);
    }

    #[test]
    fn test_uninitialized_module() {
        let mut module = SimpleLoginModule::default();
        assert_eq!(module.state(), LoginState::Uninitialized);
        assert!(matches!(module.login(), Err(AuthError::NotInitialized)));
        assert!(matches!(module.commit(), Err(AuthError::NotInitialized)));

        // Discarding nothing is still a success
        assert!(module.abort().unwrap());
        assert!(module.logout().unwrap());
        assert_eq!(module.state(), LoginState::Uninitialized);
    }

    #[test]
    fn test_malformed_options_fall_back_to_defaults() {
        let options = ModuleOptions::new().with("strict_commit", 42);
        let (module, _subject) = initialized(USERNAME, PASSWORD, options);
        assert_eq!(module.config(), SimpleLoginConfig::default());
        // The raw options are still kept
        assert_eq!(module.options().map(ModuleOptions::len), Some(1));
    }

    #[test]
    fn test_initialize_resets_pending_lists() {
        let (mut module, subject) = initialized(USERNAME, PASSWORD, ModuleOptions::new());
        assert!(module.login().unwrap());
        assert_eq!(module.pending_users().len(), 1);

        module.initialize(
            subject,
            Box::new(StaticCallbackHandler::new(USERNAME, PASSWORD)),
            SharedState::new(),
            ModuleOptions::new(),
        );
        assert!(module.pending_users().is_empty());
        assert!(module.pending_roles().is_empty());
        assert_eq!(module.state(), LoginState::Initialized);
    }
}
