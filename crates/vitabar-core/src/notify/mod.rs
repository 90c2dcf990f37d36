//! Platform-native desktop notification dispatch.
//!
//! Best-effort delivery: a notification that cannot be sent is logged and
//! dropped, never surfaced as an error. Used to present the full day's
//! schedule on demand.

use tracing::{info, warn};

#[cfg(not(target_os = "linux"))]
use tracing::debug;

/// Send a platform-native desktop notification (best-effort).
///
/// - Linux: `notify-send` (requires libnotify)
/// - macOS: `osascript` (Notification Center)
/// - Other: no-op
pub fn send_notification(title: &str, body: &str) {
    info!(
        event = "core.notify.dispatch_started",
        title = title,
        body_bytes = body.len(),
    );

    dispatch_platform_notification(title, body);
}

fn log_dispatch_result(title: &str, result: std::io::Result<std::process::Output>) {
    match result {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.dispatch_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.dispatch_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.dispatch_failed",
                title = title,
                error = %e,
            );
        }
    }
}

#[cfg(target_os = "linux")]
fn dispatch_platform_notification(title: &str, body: &str) {
    if let Err(e) = which::which("notify-send") {
        warn!(
            event = "core.notify.dispatch_skipped",
            reason = "notify-send not found",
            error = %e,
        );
        return;
    }

    let result = std::process::Command::new("notify-send")
        .arg(title)
        .arg(body)
        .output();
    log_dispatch_result(title, result);
}

#[cfg(target_os = "macos")]
fn dispatch_platform_notification(title: &str, body: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        applescript_escape(body),
        applescript_escape(title)
    );

    let result = std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output();
    log_dispatch_result(title, result);
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn dispatch_platform_notification(title: &str, _body: &str) {
    debug!(
        event = "core.notify.dispatch_skipped",
        title = title,
        reason = "unsupported platform",
    );
}

/// Escape a string for embedding in a double-quoted AppleScript literal.
#[cfg(any(target_os = "macos", test))]
fn applescript_escape(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}
