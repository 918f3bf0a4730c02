//! Timetable feed row types and decoding.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Maximum number of payload bytes echoed into a decode error.
const PREVIEW_LEN: usize = 500;

/// One row of the solive timetable feed.
///
/// `hour` is wall-clock `HH:MM` with no date part; the feed relies on row
/// order plus the wrap back to `00:00` to mark the day boundary. Values are
/// not validated here — a malformed `hour` passes through to the digest
/// unchanged (the published feed is well-formed in practice).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimetableEntry {
    /// Broadcast start, `HH:MM`.
    #[serde(default)]
    pub hour: String,
    /// Segment title; equals the umbrella programme title when the row has
    /// no distinct segment.
    #[serde(default)]
    pub title: String,
    /// Caster code (may be empty or unknown to the directory).
    #[serde(default)]
    pub caster: String,
}

/// Decodes a timetable payload (a JSON array of rows).
///
/// # Errors
///
/// Returns an error when the payload is not valid JSON or the top level is
/// not an array; the message carries a bounded payload preview.
pub fn parse_timetable(raw: &str) -> Result<Vec<TimetableEntry>> {
    serde_json::from_str(raw).with_context(|| {
        format!(
            "timetable JSON decoding failed (len={}): {}",
            raw.len(),
            payload_preview(raw),
        )
    })
}

/// Bounds the error-message payload preview without splitting a multi-byte
/// character.
fn payload_preview(raw: &str) -> &str {
    if raw.len() <= PREVIEW_LEN {
        return raw;
    }
    let end = (0..=PREVIEW_LEN)
        .rev()
        .find(|&i| raw.is_char_boundary(i))
        .unwrap_or(0);
    raw.get(..end).unwrap_or("")
}
