//! Solive timetable module.
//!
//! Fetches the WNL timetable JSON from the solive endpoint and renders it
//! as a dated, human-readable text digest. The feed carries only a time of
//! day per row; day-boundary resolution lives in [`digest`].

mod api;
mod casters;
mod client;
mod digest;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTimetableApi, TimetableApi};
pub use casters::resolve_caster;
#[allow(clippy::module_name_repetitions)]
pub use client::{TIMETABLE_URL, TimetableClient, TimetableClientBuilder};
pub use digest::{WNL_TITLE, digest_lines, render};
#[allow(clippy::module_name_repetitions)]
pub use types::{TimetableEntry, parse_timetable};
