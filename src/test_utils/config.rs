//! Configuration utilities for testing.
//!
//! This module provides test configuration builders used to point the session
//! client at mock servers.

use crate::config::PortalConfig;

/// Builder for creating test portal configurations.
#[derive(Debug)]
pub struct TestPortalConfigBuilder {
    login_url: String,
    target_url: String,
    timeout_sec: u64,
}

impl TestPortalConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            login_url: "http://test.local/siteminderagent/forms/login.fcc".to_string(),
            target_url: "http://test.local/".to_string(),
            timeout_sec: 10,
        }
    }

    /// Sets the login endpoint for the test configuration.
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    /// Sets the post-login target for the test configuration.
    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = url.into();
        self
    }

    /// Sets the request timeout for the test configuration.
    pub fn with_timeout_sec(mut self, timeout_sec: u64) -> Self {
        self.timeout_sec = timeout_sec;
        self
    }

    /// Builds the portal configuration.
    pub fn build(self) -> PortalConfig {
        PortalConfig {
            login_url: self.login_url,
            target_url: self.target_url,
            timeout_sec: self.timeout_sec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_config_builder() {
        let config = TestPortalConfigBuilder::new()
            .with_login_url("http://mock.local/login.fcc")
            .with_target_url("http://mock.local/")
            .with_timeout_sec(2)
            .build();

        assert_eq!(config.login_url, "http://mock.local/login.fcc");
        assert_eq!(config.target_url, "http://mock.local/");
        assert_eq!(config.timeout_sec, 2);
    }

    #[test]
    fn test_portal_config_builder_defaults() {
        let config = TestPortalConfigBuilder::new().build();
        assert_eq!(config.timeout_sec, 10);
        assert!(config.login_url.ends_with("/login.fcc"));
    }
}
