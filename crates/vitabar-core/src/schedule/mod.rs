//! Timetable subprocess invocation and output formatting.
//!
//! The external `vitable` CLI is the source of truth for timetable data;
//! this module shells out to it, captures stdout/stderr, and formats the
//! result for the status surface. Output structure is never interpreted
//! beyond UTF-8 decoding, trimming, and emptiness checks.

pub mod errors;
pub mod operations;
pub mod types;

pub use errors::ScheduleError;
pub use operations::{FALLBACK_LABEL, format_for_display, poll_ongoing, run_query};
pub use types::ScheduleQuery;
