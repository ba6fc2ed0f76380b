// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Pelican API.

use std::time::Duration;

use reqwest::Client;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{Transport, VendorResponse};

// ============================================================================
// HttpConfig - Site and account parameters
// ============================================================================

/// Configuration for a Pelican site.
///
/// # Examples
///
/// ```
/// use pelican_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("acme", "user@example.com", "secret")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://acme.officeclimatecontrol.net/api.cgi");
///
/// // Point at a proxy or a test server instead
/// let config = HttpConfig::new("acme", "user", "pw").with_base_url("http://127.0.0.1:8080/api.cgi");
/// assert_eq!(config.base_url(), "http://127.0.0.1:8080/api.cgi");
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    site: String,
    username: String,
    password: String,
    base_url: Option<String>,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for `site` with account credentials.
    ///
    /// # Arguments
    ///
    /// * `site` - The site identifier, the first label of `{site}.officeclimatecontrol.net`
    /// * `username` - Account username
    /// * `password` - Account password
    #[must_use]
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            username: username.into(),
            password: password.into(),
            base_url: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the endpoint URL derived from the site name.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the site identifier.
    #[must_use]
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => format!("https://{}.officeclimatecontrol.net/api.cgi", self.site),
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the site name cannot form a
    /// host label, or `ProtocolError::Http` if the client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.base_url.is_none()
            && (self.site.is_empty()
                || !self
                    .site
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-'))
        {
            return Err(ProtocolError::InvalidAddress(format!(
                "invalid site name: {:?}",
                self.site
            )));
        }

        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            username: self.username,
            password: self.password,
        })
    }
}

impl std::fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfig")
            .field("site", &self.site)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for one Pelican site.
///
/// Each command becomes a GET on `api.cgi` with the account credentials and
/// the command's `request`/`object`/`selection`/`value` parameters.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    username: String,
    password: String,
}

impl HttpClient {
    /// Returns the endpoint URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full request URL for a command.
    fn build_url<C: Command>(&self, command: &C) -> String {
        let mut url = format!(
            "{}?username={}&password={}",
            self.base_url,
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        );
        for (key, value) in command.query_pairs() {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }
        url
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpClient {
    async fn send<C: Command + Sync>(&self, command: &C) -> Result<VendorResponse, ProtocolError> {
        let url = self.build_url(command);
        let selection = command.selection().unwrap_or_default();

        tracing::debug!(
            request = %command.request(),
            object = command.object(),
            selection = %selection,
            value = %command.value(),
            "Sending Pelican request"
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProtocolError::Http(e.without_url()))?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProtocolError::Http(e.without_url()))?;

        tracing::debug!(body = %body, "Received Pelican response");

        Ok(VendorResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{SetpointCommand, SetpointUpdate, SiteQuery, ThermostatQuery};

    fn client() -> HttpClient {
        HttpConfig::new("acme", "user@example.com", "p&ss")
            .into_client()
            .unwrap()
    }

    #[test]
    fn build_url_for_query() {
        let url = client().build_url(&ThermostatQuery::new("Lobby"));
        assert!(url.starts_with(
            "https://acme.officeclimatecontrol.net/api.cgi?username=user%40example.com&password=p%26ss&request=get&object=Thermostat"
        ));
        assert!(url.contains("&selection=name%3ALobby%3B&value=temperature%3Bhumidity"));
    }

    #[test]
    fn build_url_without_selection() {
        let url = client().build_url(&SiteQuery);
        assert!(url.ends_with("&request=get&object=Site&value=timeZone%3B"));
        assert!(!url.contains("selection"));
    }

    #[test]
    fn build_url_for_write() {
        let cmd =
            SetpointCommand::encode("Lobby", &SetpointUpdate::new().with_heat(68.7)).unwrap();
        let url = client().build_url(&cmd);
        assert!(url.contains("&request=set&object=thermostat&selection=name%3ALobby%3B&value=heatSetting%3A68%3B"));
    }

    #[test]
    fn invalid_site_rejected() {
        let result = HttpConfig::new("bad/site", "u", "p").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
        let result = HttpConfig::new("", "u", "p").into_client();
        assert!(result.is_err());
    }

    #[test]
    fn base_url_override_skips_site_check() {
        let client = HttpConfig::new("", "u", "p")
            .with_base_url("http://127.0.0.1:9/api.cgi")
            .into_client()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/api.cgi");
    }

    #[test]
    fn debug_redacts_password() {
        let config = HttpConfig::new("acme", "user", "hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
        assert!(!format!("{:?}", client()).contains("p&ss"));
    }

    #[test]
    fn config_defaults() {
        let config = HttpConfig::new("acme", "user", "pw");
        assert_eq!(config.site(), "acme");
        assert_eq!(config.username(), "user");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
