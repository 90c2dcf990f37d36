//! Default implementations and accessors for configuration types.

use crate::config::types::{NotifyConfig, PollConfig};

/// Default external timetable command.
pub const DEFAULT_COMMAND: &str = "vitable";

/// Default refresh interval in seconds.
///
/// Matches the original indicator's fixed 30-second re-poll.
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Default notification title.
pub const DEFAULT_NOTIFY_TITLE: &str = "VITable";

/// Returns whether notifications are enabled by default (true).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_notify_enabled() -> bool {
    true
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            title: None,
            enabled: true,
        }
    }
}

impl PollConfig {
    /// Returns the configured command, defaulting to `vitable`.
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_COMMAND)
    }

    /// Returns the refresh interval in seconds, defaulting to 30.
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS)
    }
}

impl NotifyConfig {
    /// Returns the notification title, defaulting to "VITable".
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_NOTIFY_TITLE)
    }
}
