//! Production surface implementations.

use std::io::Write;

use tracing::warn;

use crate::indicator::traits::{NotificationSurface, StatusSurface};
use crate::notify;

/// Status surface that feeds a bar program over stdout, one line per
/// refresh.
///
/// Plain mode prints the text as-is; JSON mode prints waybar's
/// custom-module format (`{"text":"..."}`).
pub struct StdoutSurface {
    json: bool,
}

impl StdoutSurface {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Render one status line in the configured output mode.
    pub fn render_line(&self, text: &str) -> String {
        if self.json {
            serde_json::json!({ "text": text }).to_string()
        } else {
            text.to_string()
        }
    }
}

impl StatusSurface for StdoutSurface {
    fn set_status(&self, text: &str) {
        let line = self.render_line(text);
        let mut out = std::io::stdout().lock();
        // Bars read line-buffered; an unflushed line is an invisible one
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            warn!(event = "core.indicator.surface_write_failed", error = %e);
        }
    }
}

/// Notification surface backed by the platform desktop notifier.
pub struct DesktopNotifier {
    title: String,
    enabled: bool,
}

impl DesktopNotifier {
    pub fn new(title: impl Into<String>, enabled: bool) -> Self {
        Self {
            title: title.into(),
            enabled,
        }
    }
}

impl NotificationSurface for DesktopNotifier {
    fn notify(&self, body: &str) {
        if !self.enabled {
            warn!(
                event = "core.indicator.notify_disabled",
                title = %self.title,
            );
            return;
        }
        notify::send_notification(&self.title, body);
    }
}
