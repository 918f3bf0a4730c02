//! Credentials file path resolution.

use std::path::PathBuf;

/// Default credentials file, looked up in the current directory.
const CREDENTIALS_FILENAME: &str = "wnltt.toml";

/// Resolves the credentials file path.
///
/// - If `path` is `Some`, returns it unchanged.
/// - Otherwise returns `wnltt.toml` relative to the current directory.
#[must_use]
pub fn resolve_credentials_path(path: Option<&PathBuf>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(CREDENTIALS_FILENAME), Clone::clone)
}
