//! `SlackApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

/// Slack Web API trait.
///
/// Abstracts message delivery for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(SlackApi: Send)]
pub trait LocalSlackApi {
    /// Posts `text` to `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Slack refuses the
    /// message.
    async fn post_message(&self, channel: &str, text: &str) -> Result<()>;
}
