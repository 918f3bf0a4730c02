//! `TimetableApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

/// Solive timetable feed trait.
///
/// Abstracts the fetch for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TimetableApi: Send)]
pub trait LocalTimetableApi {
    /// Fetches the raw timetable payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    async fn fetch_raw(&self) -> Result<String>;
}
