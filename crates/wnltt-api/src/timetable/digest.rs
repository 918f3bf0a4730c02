//! Timetable digest rendering.
//!
//! The feed lists today's remaining slots followed by tomorrow's lineup with
//! no date field; the only day-boundary signal is the hour wrapping back to
//! `00:00`. Rendering resolves each row to a calendar date anchored in JST
//! and assembles the final text in a single pass.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Utc};

use super::casters::resolve_caster;
use super::types::TimetableEntry;

/// Umbrella programme title. Rows carrying it have no distinct segment and
/// are dropped from the digest.
pub const WNL_TITLE: &str = "ウェザーニュースLiVE";

/// Hour value marking the feed's day boundary.
const ROLLOVER_HOUR: &str = "00:00";

/// Character the day-boundary line is drawn with.
const SEPARATOR_CHAR: &str = "-";

/// Width of the day-boundary line.
const SEPARATOR_WIDTH: usize = 80;

/// JST (UTC+9). The feed's notion of "today" is anchored here regardless of
/// the process-local timezone.
#[allow(clippy::expect_used)]
static JST: LazyLock<FixedOffset> =
    LazyLock::new(|| FixedOffset::east_opt(9 * 3600).expect("failed to build JST offset"));

/// Renders timetable rows into digest lines, one string per output line.
///
/// Single left-to-right pass over `entries`:
///
/// - a `"00:00"` row latches the day offset to tomorrow (the latch never
///   resets) and pushes a separator line before the row itself;
/// - rows titled [`WNL_TITLE`] are dropped entirely;
/// - every other row becomes `"YYYY/MM/DD HH:MM title name(code)"`.
///
/// A later `"00:00"` row pushes another separator but the offset stays at
/// one day; the feed covers at most a two-day window.
#[must_use]
pub fn digest_lines(entries: &[TimetableEntry], now: DateTime<Utc>) -> Vec<String> {
    let today = now.with_timezone(&*JST).date_naive();

    let mut lines = Vec::with_capacity(entries.len());
    let mut rolled_over = false;

    for entry in entries {
        if entry.hour == ROLLOVER_HOUR {
            rolled_over = true;
            lines.push(SEPARATOR_CHAR.repeat(SEPARATOR_WIDTH));
        }

        if entry.title == WNL_TITLE {
            continue;
        }

        let date = if rolled_over {
            today.succ_opt().unwrap_or(today)
        } else {
            today
        };

        lines.push(format!(
            "{} {} {} {}({})",
            date.format("%Y/%m/%d"),
            entry.hour,
            entry.title,
            resolve_caster(&entry.caster),
            entry.caster,
        ));
    }

    lines
}

/// Joins [`digest_lines`] output into the delivered digest, every line
/// newline-terminated. Empty input yields an empty string.
#[must_use]
pub fn render(entries: &[TimetableEntry], now: DateTime<Utc>) -> String {
    let lines = digest_lines(entries, now);
    if lines.is_empty() {
        return String::new();
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}
