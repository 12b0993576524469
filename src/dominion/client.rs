use crate::config::PortalConfig;
use crate::dominion::login_form::{Credentials, LoginTemplate};
use crate::error::PortalError;
use reqwest::Client as HttpClient;
use scraper::Html;

/// Session client for the customer portal.
///
/// Owns one HTTP session (cookie store and connection pool) for its whole
/// lifetime. Logging in takes `&mut self`, so a client cannot run two logins at
/// once; share it across tasks only behind your own lock.
pub struct Client {
    http_client: HttpClient,
    config: PortalConfig,
    template: LoginTemplate,
}

impl Client {
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        let http_client = HttpClient::builder()
            .cookie_store(true)
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| PortalError::ClientBuild(e.to_string()))?;
        let template = LoginTemplate::new(config.target_url.clone());
        Ok(Self {
            http_client,
            config,
            template,
        })
    }

    /// Posts the login form once and returns the raw response body.
    ///
    /// The status code is not checked: a rejected login still yields a page,
    /// and it is up to extraction to notice that it is not the landing page.
    /// There is no retry.
    pub async fn login_page(&mut self, credentials: &Credentials) -> Result<String, PortalError> {
        let url = self.config.login_url.as_str();
        let timeout_sec = self.config.timeout_sec;
        let form = self.template.with_credentials(credentials);

        tracing::debug!("Posting login form to {}", url);
        let response = self
            .http_client
            .post(url)
            .header(reqwest::header::REFERER, url)
            .form(&form)
            .send()
            .await
            .map_err(|e| PortalError::from_reqwest(e, url, timeout_sec))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if status.is_success() {
            tracing::debug!("Login responded with {} from {}", status, final_url);
        } else {
            tracing::warn!("Login responded with {} from {}", status, final_url);
        }

        response
            .text()
            .await
            .map_err(|e| PortalError::from_reqwest(e, url, timeout_sec))
    }

    /// Logs in and parses the page the portal answers with.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<Html, PortalError> {
        let body = self.login_page(credentials).await?;
        tracing::info!("Fetched landing page ({} bytes)", body.len());
        Ok(Html::parse_document(&body))
    }

    pub fn login_url(&self) -> &str {
        &self.config.login_url
    }
}
