//! Client library for wnltt.
//!
//! Provides the ウェザーニュースLiVE solive timetable client with its digest
//! renderer, and the Slack Web API client used for delivery.

/// Slack Web API client.
pub mod slack;

/// Solive timetable client and digest rendering.
pub mod timetable;
