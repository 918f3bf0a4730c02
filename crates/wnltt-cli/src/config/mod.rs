//! Slack credential resolution.
//!
//! Credentials come from a local TOML file when one exists, otherwise from
//! the `SLACK_TOKEN` / `SLACK_CHANNEL` environment variables.

#[allow(clippy::module_inception)]
mod config;
mod paths;

pub use config::SlackCredentials;
pub use paths::resolve_credentials_path;
