use crate::error::ConfigError;
use anyhow::{anyhow, Result};
use serde_derive::Deserialize;
use std::str::FromStr;
use std::time::Duration;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load AppConfig: {}", err)),
    }
}

pub const DEFAULT_LOGIN_URL: &str =
    "https://mydom.dominionenergy.com/siteminderagent/forms/login.fcc";
pub const DEFAULT_TARGET_URL: &str = "https://mydom.dominionenergy.com/";

fn default_login_url() -> String {
    DEFAULT_LOGIN_URL.to_string()
}

fn default_target_url() -> String {
    DEFAULT_TARGET_URL.to_string()
}

fn default_timeout_sec() -> u64 {
    10
}

// Headroom between the connect deadline and the overall request deadline.
const CONNECT_MARGIN: Duration = Duration::from_millis(200);

/// Where and how to log in. Credentials are deliberately not part of it.
#[derive(Deserialize, Debug, Clone)]
pub struct PortalConfig {
    #[serde(default = "default_login_url")]
    pub login_url: String,
    // page the portal redirects to after a successful login
    #[serde(default = "default_target_url")]
    pub target_url: String,
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            target_url: default_target_url(),
            timeout_sec: default_timeout_sec(),
        }
    }
}

impl PortalConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }

    /// Deadline for establishing the connection.
    ///
    /// The overall deadline starts first, so the connect deadline has to end
    /// before it for a hanging connect to be reported as a connection failure.
    pub fn connect_timeout(&self) -> Duration {
        self.timeout().saturating_sub(CONNECT_MARGIN)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.timeout_sec == 0 {
            return Err(ConfigError::invalid(
                "timeout_sec",
                "must be greater than zero",
            ));
        }
        if self.login_url.trim().is_empty() {
            return Err(ConfigError::invalid("login_url", "must not be empty"));
        }
        Ok(self)
    }
}

pub(crate) fn load_portal_config() -> Result<PortalConfig, ConfigError> {
    envy::prefixed("DOMINION_")
        .from_env::<PortalConfig>()
        .map_err(ConfigError::env_parse)?
        .validate()
}
