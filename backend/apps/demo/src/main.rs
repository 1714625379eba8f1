//! Login Demo Entry Point
//!
//! Drives one authentication attempt against the simple login module.
//! Uses `anyhow` for startup errors; module errors are
//! `simple_auth::AuthError`.
//!
//! Environment:
//! - `LOGIN_MODULE_OPTIONS` - module options as a JSON object (default `{}`)
//! - `LOGIN_USERNAME` / `LOGIN_PASSWORD` - answer the prompts without a
//!   terminal when both are set
//! - `RUST_LOG` - tracing filter

use std::env;
use std::process::ExitCode;

use simple_auth::callback::{CallbackHandler, ConsoleCallbackHandler, StaticCallbackHandler};
use simple_auth::{LoginModule, ModuleOptions, SharedState, SimpleLoginModule, Subject};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn callback_handler() -> Box<dyn CallbackHandler> {
    match (env::var("LOGIN_USERNAME"), env::var("LOGIN_PASSWORD")) {
        (Ok(username), Ok(password)) => {
            tracing::info!("Using credentials from the environment");
            Box::new(StaticCallbackHandler::new(username, password))
        }
        _ => Box::new(ConsoleCallbackHandler::stdio()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr keeps prompts on stdout readable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_demo=info,simple_auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let raw_options = env::var("LOGIN_MODULE_OPTIONS").unwrap_or_else(|_| "{}".to_string());
    let options = ModuleOptions::from_json(&raw_options)?;

    let subject = Subject::new();
    let mut module = SimpleLoginModule::new();
    module.initialize(
        subject.clone(),
        callback_handler(),
        SharedState::new(),
        options,
    );

    if !module.login()? {
        module.abort()?;
        tracing::warn!(attempt_id = %module.attempt_id(), "Authentication failed");
        println!("Authentication failed.");
        return Ok(ExitCode::FAILURE);
    }

    if !module.commit()? {
        module.abort()?;
        println!("Commit refused.");
        return Ok(ExitCode::FAILURE);
    }

    println!("Authentication succeeded. Principals:");
    for principal in subject.principals() {
        println!("  {}", principal);
    }

    module.logout()?;
    tracing::info!(principals = subject.len(), "Demo finished");
    Ok(ExitCode::SUCCESS)
}
