//! `SlackCredentials` struct and TOML/environment resolution.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Environment variable holding the bot token.
const TOKEN_ENV: &str = "SLACK_TOKEN";

/// Environment variable holding the destination channel.
const CHANNEL_ENV: &str = "SLACK_CHANNEL";

/// Slack bot credentials.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SlackCredentials {
    /// Bot token (`xoxb-…`).
    pub token: String,
    /// Destination channel ID or name.
    pub channel: String,
}

impl SlackCredentials {
    /// Resolves credentials with file-first precedence.
    ///
    /// Reads the TOML file at `path` when it exists; an unreadable or
    /// malformed file is an error, not a fallback. When the file is absent,
    /// `SLACK_TOKEN` / `SLACK_CHANNEL` are read instead. Either way an empty
    /// token or channel fails fast.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if either
    /// field ends up empty.
    pub fn resolve(path: &Path) -> Result<Self> {
        let credentials = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::from_env()
        };
        credentials.validated()
    }

    /// Reads credentials from a TOML file.
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Reads credentials from the environment. Unset variables become empty
    /// strings and are rejected by validation.
    fn from_env() -> Self {
        Self {
            token: std::env::var(TOKEN_ENV).unwrap_or_default(),
            channel: std::env::var(CHANNEL_ENV).unwrap_or_default(),
        }
    }

    /// Rejects empty fields.
    fn validated(self) -> Result<Self> {
        if self.token.is_empty() {
            bail!("Slack token is empty (set it in the credentials file or {TOKEN_ENV})");
        }
        if self.channel.is_empty() {
            bail!("Slack channel is empty (set it in the credentials file or {CHANNEL_ENV})");
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_resolve_from_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wnltt.toml");
        std::fs::write(&path, "token = \"xoxb-abc\"\nchannel = \"C0123456789\"\n").unwrap();

        // Act
        let credentials = SlackCredentials::resolve(&path).unwrap();

        // Assert
        assert_eq!(
            credentials,
            SlackCredentials {
                token: String::from("xoxb-abc"),
                channel: String::from("C0123456789"),
            }
        );
    }

    #[test]
    fn test_malformed_file_is_error_not_fallback() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wnltt.toml");
        std::fs::write(&path, "token = \"xoxb-abc\"\nchannel =").unwrap();

        // Act
        let result = SlackCredentials::resolve(&path);

        // Assert
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }

    #[test]
    fn test_file_with_empty_token_is_rejected() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wnltt.toml");
        std::fs::write(&path, "token = \"\"\nchannel = \"C0123456789\"\n").unwrap();

        // Act
        let result = SlackCredentials::resolve(&path);

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Slack token is empty")
        );
    }

    #[test]
    fn test_file_with_missing_channel_is_parse_error() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wnltt.toml");
        std::fs::write(&path, "token = \"xoxb-abc\"\n").unwrap();

        // Act & Assert
        assert!(SlackCredentials::resolve(&path).is_err());
    }
}
