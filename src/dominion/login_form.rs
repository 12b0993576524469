//! Form payload posted to the portal's login endpoint.

use serde::Serialize;
use std::fmt;

/// Username and password for one login. Never stored, never logged.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fixed part of the login form.
///
/// Borrowed immutably for every login, so each request gets its own
/// [`LoginForm`] and the template itself never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginTemplate {
    auth_reason: &'static str,
    locale: &'static str,
    target: String,
}

impl LoginTemplate {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            auth_reason: "0",
            locale: "US-EN",
            target: target.into(),
        }
    }

    /// Combines the template with one set of credentials.
    pub fn with_credentials<'a>(&'a self, credentials: &'a Credentials) -> LoginForm<'a> {
        LoginForm {
            password: &credentials.password,
            user: &credentials.username,
            post_preservation_data: None,
            auth_reason: self.auth_reason,
            locale: self.locale,
            user_message: None,
            target: &self.target,
            agent_name: None,
        }
    }
}

/// The form-encoded body of one login request.
///
/// Fields left empty are omitted from the encoded body.
#[derive(Serialize)]
pub struct LoginForm<'a> {
    #[serde(rename = "PASSWORD")]
    password: &'a str,
    #[serde(rename = "USER")]
    user: &'a str,
    #[serde(rename = "postpreservationdata", skip_serializing_if = "Option::is_none")]
    post_preservation_data: Option<&'a str>,
    #[serde(rename = "smauthreason")]
    auth_reason: &'a str,
    #[serde(rename = "SMLOCALE")]
    locale: &'a str,
    #[serde(rename = "smusrmsg", skip_serializing_if = "Option::is_none")]
    user_message: Option<&'a str>,
    target: &'a str,
    #[serde(rename = "smagentname", skip_serializing_if = "Option::is_none")]
    agent_name: Option<&'a str>,
}

impl fmt::Debug for LoginForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("USER", &self.user)
            .field("PASSWORD", &"<redacted>")
            .field("smauthreason", &self.auth_reason)
            .field("SMLOCALE", &self.locale)
            .field("target", &self.target)
            .finish()
    }
}
