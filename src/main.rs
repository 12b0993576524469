//! Dominion Energy bill scraper
//!
//! Logs into the Dominion Energy customer portal with interactively supplied
//! credentials and prints the current bill read from the landing page: usage,
//! amount, service period and due date.
//!
//! # Flow
//!
//! 1. Prompt for username and password (never stored, never logged)
//! 2. Post the login form once, with a bounded timeout and no retry
//! 3. Extract the billing fields from the returned page and print them

mod config;
mod dominion;
mod error;
mod model;

#[cfg(test)]
mod test_utils;

use crate::dominion::{BillExtractor, Client, Credentials, DOMINION_LANDING_PAGE};
use crate::error::{Error, ParseError, Result};
use anyhow::Context;
use dialoguer::{Input, Password};

/// Application entry point.
///
/// Loads configuration, initializes logging and runs one scrape. Any failure is
/// printed with its cause chain and the process exits non-zero.
#[tokio::main]
async fn main() {
    let app_config = config::load_app_config().expect("Failed to load AppConfig");
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    if let Err(err) = run().await {
        report_error(&err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let portal_config = config::load_portal_config()?;
    let mut client = Client::new(portal_config)?;

    tracing::info!("Logging in to {}", client.login_url());
    let credentials = prompt_credentials()?;
    let document = client.login(&credentials).await?;
    drop(credentials);

    let extractor = BillExtractor::new(&document)?;
    println!("\n{}\n", extractor.record());
    Ok(())
}

/// Asks for username and password on the terminal.
fn prompt_credentials() -> Result<Credentials> {
    let username: String = Input::new()
        .with_prompt("Username")
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("username must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read username")?;
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .context("Failed to read password")?;
    Ok(Credentials::new(username.trim(), password))
}

/// Hint shown when the page after login has no landing page container.
fn rejected_login_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::Structure(ParseError::ElementNotFound { selector })
            if *selector == DOMINION_LANDING_PAGE.container_selector() =>
        {
            Some("The portal did not return the account landing page; the login was most likely rejected.")
        }
        _ => None,
    }
}

fn report_error(err: &Error) {
    if let Some(hint) = rejected_login_hint(err) {
        tracing::warn!("{}", hint);
    }

    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    tracing::error!("{}", message);
    eprintln!("Error: {}", message);
}
