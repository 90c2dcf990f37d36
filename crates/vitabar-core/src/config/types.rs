//! Configuration type definitions for vitabar.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [poll]
//! command = "vitable"
//! interval_secs = 30
//!
//! [notify]
//! title = "VITable"
//! enabled = true
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from `~/.vitabar/config.toml` and `./.vitabar/config.toml`;
/// project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VitabarConfig {
    /// Polling behavior (external command, refresh interval)
    #[serde(default)]
    pub poll: PollConfig,

    /// Desktop notification preferences
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Polling configuration.
///
/// Controls which external command is invoked and how often the
/// status surface is refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PollConfig {
    /// External timetable command to invoke. Default: `vitable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Interval in seconds between refresh cycles. Default: 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,
}

/// Desktop notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Title used for the full-schedule notification. Default: "VITable".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether desktop notifications are sent at all.
    #[serde(default = "super::defaults::default_notify_enabled")]
    pub enabled: bool,
}
