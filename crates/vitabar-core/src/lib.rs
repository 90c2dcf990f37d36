//! vitabar-core: Core library for the vitabar timetable indicator
//!
//! This library provides the business logic for polling the `vitable`
//! timetable CLI and reflecting its output on a status surface. It is
//! used by the `vitabar` CLI binary.
//!
//! # Main Entry Points
//!
//! - [`indicator`] - The polling controller and display surfaces
//! - [`schedule`] - Subprocess invocation and output formatting
//! - [`notify`] - Desktop notification dispatch
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging setup

pub mod config;
pub mod errors;
pub mod events;
pub mod indicator;
pub mod logging;
pub mod notify;
pub mod schedule;

// Re-export commonly used types at crate root for convenience
pub use config::VitabarConfig;
pub use errors::{ConfigError, VitabarError, VitabarResult};
pub use indicator::PollController;
pub use indicator::surfaces::{DesktopNotifier, StdoutSurface};
pub use indicator::traits::{NotificationSurface, StatusSurface};
pub use schedule::errors::ScheduleError;
pub use schedule::operations::FALLBACK_LABEL;
pub use schedule::types::ScheduleQuery;

// Re-export logging initialization
pub use logging::init_logging;
