//! `TimetableClient` - solive timetable feed client implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalTimetableApi;

/// Published solive timetable feed URL.
pub const TIMETABLE_URL: &str = "http://smtgvs.weathernews.jp/a/solive_timetable/timetable.json";

/// Default fetch timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Solive timetable feed client.
///
/// One GET per run, no retries; a failed fetch is terminal for the caller.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TimetableClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Feed URL.
    base_url: Url,
}

/// Builder for `TimetableClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TimetableClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl TimetableClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the feed URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the fetch timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TimetableClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(TIMETABLE_URL);
            result.context("invalid default feed URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("failed to build HTTP client")?;

        Ok(TimetableClient {
            http_client,
            base_url,
        })
    }
}

impl TimetableClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TimetableClientBuilder {
        TimetableClientBuilder::new()
    }
}

impl LocalTimetableApi for TimetableClient {
    #[instrument(skip_all)]
    async fn fetch_raw(&self) -> Result<String> {
        let response = self
            .http_client
            .get(self.base_url.clone())
            .send()
            .await
            .context("timetable request failed")?;

        let status = response.status();
        tracing::trace!(%status, "timetable response status");

        let response = response
            .error_for_status()
            .context("timetable request rejected")?;

        let body = response
            .text()
            .await
            .context("failed to read timetable response")?;

        tracing::debug!(body_len = body.len(), "timetable payload received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::super::types::parse_timetable;
    use super::*;

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = TimetableClient::builder().build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_builder_with_user_agent_succeeds() {
        // Arrange & Act
        let result = TimetableClient::builder().user_agent("test/0.0.0").build();

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_with_custom_base_url() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/timetable.json").unwrap();

        // Act
        let client = TimetableClient::builder()
            .base_url(custom_url.clone())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url, custom_url);
    }

    #[tokio::test]
    async fn test_fetch_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/timetable/timetable.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/a/solive_timetable/timetable.json"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/a/solive_timetable/timetable.json", mock_server.uri());
        let client = TimetableClient::builder()
            .base_url(base_url.parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let raw = client.fetch_raw().await.unwrap();
        let entries = parse_timetable(&raw).unwrap();

        // Assert
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].caster, "tokita");
    }

    #[tokio::test]
    async fn test_user_agent_is_sent() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::header("User-Agent", "wnltt/0.1.0"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/timetable.json", mock_server.uri());
        let client = TimetableClient::builder()
            .base_url(base_url.parse().unwrap())
            .user_agent("wnltt/0.1.0")
            .build()
            .unwrap();

        // Act & Assert (mock expect(1) verifies User-Agent header)
        client.fetch_raw().await.unwrap();
    }

    #[tokio::test]
    async fn test_http_error_status_is_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/timetable.json", mock_server.uri());
        let client = TimetableClient::builder()
            .base_url(base_url.parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let result = client.fetch_raw().await;

        // Assert: a single attempt, surfaced as an error
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("timetable request rejected")
        );
    }
}
