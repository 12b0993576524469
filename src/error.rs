//! Error types for the Dominion Energy bill scraper.
//!
//! Transport failures and page-structure failures are kept apart so the caller
//! can tell "could not reach the portal" from "reached it, but the page is not
//! the one we know how to read".

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Login and transport errors
    #[error("portal error")]
    Portal(#[from] PortalError),

    /// The landing page did not have the expected layout
    #[error("structural mismatch")]
    Structure(#[from] ParseError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Errors raised by the session client while logging in.
#[derive(Error, Debug)]
pub enum PortalError {
    /// The portal host could not be reached at all
    #[error("connection to {url} failed; are you connected to the internet?")]
    Connection { url: String },

    /// The portal did not answer within the configured bound
    #[error("request failed to load within {0} seconds")]
    Timeout(u64),

    /// Any other transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Structural mismatches found while reading the landing page.
///
/// Every variant names the element (or attribute) that was expected, see
/// [`ParseError::element`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// Element not found in HTML
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    /// Invalid CSS selector
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Failed to parse numeric value
    #[error("failed to parse number from '{text}' in {element}: {message}")]
    NumberParse {
        element: String,
        text: String,
        message: String,
    },

    /// The embedded literal could not be read
    #[error("malformed literal in {element} at offset {position}: {message}")]
    Literal {
        element: String,
        position: usize,
        message: String,
    },

    /// The element exists but its content is not shaped as expected
    #[error("unexpected shape of {element}: {message}")]
    UnexpectedShape { element: String, message: String },
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl PortalError {
    /// Classifies a transport error into connection, timeout or generic failure.
    ///
    /// Connect failures win over timeouts, so a connect that hangs until its
    /// deadline is a connection failure. A request that dies before any
    /// response arrives because the peer reset or closed the connection is a
    /// connection failure too. Only a deadline hit on an established
    /// connection is reported as a timeout.
    pub fn from_reqwest(err: reqwest::Error, url: &str, timeout_sec: u64) -> Self {
        if err.is_connect() || (err.is_request() && is_connection_lost(&err)) {
            Self::Connection {
                url: url.to_string(),
            }
        } else if err.is_timeout() {
            Self::Timeout(timeout_sec)
        } else {
            Self::Http(err)
        }
    }
}

// hyper reports a peer that hung up mid-exchange with this message and no io cause.
const INCOMPLETE_MESSAGE: &str = "connection closed before message completed";

/// Whether the cause chain ends in the peer dropping the connection.
fn is_connection_lost(err: &(dyn std::error::Error + 'static)) -> bool {
    use std::io::ErrorKind;

    let mut source = Some(err);
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::ConnectionRefused
                    | ErrorKind::BrokenPipe
                    | ErrorKind::NotConnected
                    | ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        if cause.to_string().starts_with(INCOMPLETE_MESSAGE) {
            return true;
        }
        source = cause.source();
    }
    false
}

impl ParseError {
    /// Creates an element not found error.
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }

    /// Creates an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: err.to_string(),
        }
    }

    /// Creates a number parse error.
    pub fn number_parse(
        element: impl Into<String>,
        text: impl Into<String>,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::NumberParse {
            element: element.into(),
            text: text.into(),
            message: err.to_string(),
        }
    }

    /// Creates an unexpected shape error.
    pub fn unexpected_shape(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Name of the element or attribute the page was expected to contain.
    pub fn element(&self) -> &str {
        match self {
            Self::ElementNotFound { selector } | Self::InvalidSelector { selector, .. } => {
                selector
            }
            Self::NumberParse { element, .. }
            | Self::Literal { element, .. }
            | Self::UnexpectedShape { element, .. } => element,
        }
    }
}
