//! The polling controller.
//!
//! Owns the single repeating timer task. Each cycle polls the external
//! command, formats the result, and writes it to the status surface;
//! failures degrade to the fallback label and never halt the loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::indicator::traits::{NotificationSurface, StatusSurface};
use crate::schedule::operations::{self, format_for_display};
use crate::schedule::types::ScheduleQuery;

/// Polls the external timetable command on a fixed interval and reflects
/// the result on the injected surfaces.
///
/// State machine: `Stopped` (no timer task) and `Running` (one live timer
/// task). [`start`](Self::start) is re-entrant and cancel-and-replace, so
/// at most one timer task is ever live.
pub struct PollController {
    command: String,
    interval: Duration,
    surface: Arc<dyn StatusSurface>,
    notifier: Arc<dyn NotificationSurface>,
    /// Handle of the live timer task, absent when stopped.
    timer: Option<JoinHandle<()>>,
}

impl PollController {
    pub fn new(
        command: impl Into<String>,
        interval: Duration,
        surface: Arc<dyn StatusSurface>,
        notifier: Arc<dyn NotificationSurface>,
    ) -> Self {
        Self {
            command: command.into(),
            interval,
            surface,
            notifier,
            timer: None,
        }
    }

    /// Whether a timer task is currently live.
    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Start polling: one immediate refresh cycle, then a repeating timer.
    ///
    /// Re-entrant: any live timer is cancelled before the new one is
    /// scheduled, so two calls never leave two concurrent timers.
    pub fn start(&mut self) {
        self.stop();

        info!(
            event = "core.indicator.started",
            command = %self.command,
            interval_secs = self.interval.as_secs(),
        );

        let command = self.command.clone();
        let interval = self.interval;
        let surface = Arc::clone(&self.surface);

        self.timer = Some(tokio::spawn(async move {
            // Cycles are strictly sequential: the next one is armed only
            // after the previous one fully completed.
            loop {
                refresh_cycle(&command, surface.as_ref()).await;
                tokio::time::sleep(interval).await;
            }
        }));
    }

    /// Cancel the timer if one is live. A no-op when already stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
            info!(event = "core.indicator.stopped");
        }
    }

    /// Fetch the full day's schedule and forward it, unmodified, to the
    /// notification surface.
    ///
    /// Independent of the repeating timer; may overlap an in-flight
    /// refresh cycle. On failure the error is logged and no notification
    /// is sent.
    pub async fn fetch_full_report(&self) {
        let command = self.command.clone();
        let result =
            tokio::task::spawn_blocking(move || operations::run_query(&command, ScheduleQuery::FullDay))
                .await;

        match result {
            Ok(Ok(stdout)) => {
                info!(
                    event = "core.indicator.full_report_completed",
                    bytes = stdout.len(),
                );
                self.notifier.notify(&stdout);
            }
            Ok(Err(e)) => {
                warn!(event = "core.indicator.full_report_failed", error = %e);
            }
            Err(e) => {
                warn!(event = "core.indicator.full_report_failed", error = %e);
            }
        }
    }
}

impl Drop for PollController {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One poll-format-display cycle.
///
/// The blocking subprocess call runs on the blocking pool so the caller's
/// event loop is never stalled for the duration of the external process.
async fn refresh_cycle(command: &str, surface: &dyn StatusSurface) {
    let owned = command.to_string();
    let raw = match tokio::task::spawn_blocking(move || operations::poll_ongoing(&owned)).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(event = "core.indicator.refresh_join_failed", error = %e);
            String::new()
        }
    };

    let text = format_for_display(&raw);
    surface.set_status(&text);
    debug!(event = "core.indicator.refresh_completed", status = %text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::operations::FALLBACK_LABEL;
    use std::sync::Mutex;

    struct RecordingSurface {
        statuses: Mutex<Vec<String>>,
    }

    impl RecordingSurface {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                statuses: Mutex::new(Vec::new()),
            })
        }

        fn statuses(&self) -> Vec<String> {
            self.statuses.lock().unwrap().clone()
        }
    }

    impl StatusSurface for RecordingSurface {
        fn set_status(&self, text: &str) {
            self.statuses.lock().unwrap().push(text.to_string());
        }
    }

    struct RecordingNotifier {
        bodies: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                bodies: Mutex::new(Vec::new()),
            })
        }

        fn bodies(&self) -> Vec<String> {
            self.bodies.lock().unwrap().clone()
        }
    }

    impl NotificationSurface for RecordingNotifier {
        fn notify(&self, body: &str) {
            self.bodies.lock().unwrap().push(body.to_string());
        }
    }

    /// Write an executable fake timetable script into `dir`.
    fn write_script(dir: &tempfile::TempDir, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join("fake-vitable");
        std::fs::write(&path, body).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn controller_with(
        command: &str,
        interval: Duration,
        surface: Arc<RecordingSurface>,
        notifier: Arc<RecordingNotifier>,
    ) -> PollController {
        PollController::new(command, interval, surface, notifier)
    }

    #[tokio::test]
    async fn test_start_runs_immediate_cycle_and_rearms() {
        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let mut controller = controller_with(
            "/bin/echo",
            Duration::from_millis(100),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        controller.start();
        assert!(controller.is_running());
        tokio::time::sleep(Duration::from_millis(450)).await;
        controller.stop();

        let statuses = surface.statuses();
        // One immediate cycle plus roughly one per elapsed interval
        assert!(
            (3..=6).contains(&statuses.len()),
            "expected ~4 cycles in 450ms at 100ms interval, got {}",
            statuses.len()
        );
        // /bin/echo o -> "o\n" -> trimmed "o"
        assert!(statuses.iter().all(|s| s == "o"));
    }

    #[tokio::test]
    async fn test_start_twice_leaves_one_timer() {
        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let mut controller = controller_with(
            "/bin/echo",
            Duration::from_millis(200),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        controller.start();
        controller.start();
        assert!(controller.is_running());

        tokio::time::sleep(Duration::from_millis(300)).await;
        controller.stop();

        // At most two immediate cycles (the first may be cancelled before
        // it runs) plus exactly one re-arm at ~200ms. Two live timers
        // would have produced two re-arms.
        let count = surface.statuses().len();
        assert!(
            (1..=3).contains(&count),
            "duplicate timer suspected: {count} cycles in 300ms at 200ms interval"
        );
    }

    #[tokio::test]
    async fn test_stop_cancels_pending_cycles() {
        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let mut controller = controller_with(
            "/bin/echo",
            Duration::from_millis(50),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        controller.start();
        tokio::time::sleep(Duration::from_millis(120)).await;
        controller.stop();
        assert!(!controller.is_running());

        // Let any in-flight cycle drain, then verify the count is frozen
        tokio::time::sleep(Duration::from_millis(50)).await;
        let frozen = surface.statuses().len();
        assert!(frozen >= 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(surface.statuses().len(), frozen);
    }

    #[tokio::test]
    async fn test_stop_without_start_is_noop() {
        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let mut controller = controller_with(
            "/bin/echo",
            Duration::from_secs(30),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        assert!(!controller.is_running());
        controller.stop();
        assert!(!controller.is_running());
        assert!(surface.statuses().is_empty());
    }

    #[tokio::test]
    async fn test_failing_command_degrades_to_fallback_and_rearms() {
        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let mut controller = controller_with(
            "false",
            Duration::from_millis(100),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        controller.start();
        tokio::time::sleep(Duration::from_millis(350)).await;
        controller.stop();

        let statuses = surface.statuses();
        assert!(
            statuses.len() >= 2,
            "timer should re-arm after a failed poll, got {} cycles",
            statuses.len()
        );
        assert!(statuses.iter().all(|s| s == FALLBACK_LABEL));
    }

    #[tokio::test]
    async fn test_fetch_full_report_forwards_stdout_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(&dir, "#!/bin/sh\nprintf 'Physics 3pm\\nChem 5pm'\n");

        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let controller = controller_with(
            &script,
            Duration::from_secs(30),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        controller.fetch_full_report().await;

        assert_eq!(notifier.bodies(), vec!["Physics 3pm\nChem 5pm".to_string()]);
        // The status surface is untouched by the full report path
        assert!(surface.statuses().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_full_report_failure_sends_nothing() {
        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let controller = controller_with(
            "false",
            Duration::from_secs(30),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        controller.fetch_full_report().await;
        assert!(notifier.bodies().is_empty());

        let launch_fail = controller_with(
            "vitabar-test-missing-binary",
            Duration::from_secs(30),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );
        launch_fail.fetch_full_report().await;
        assert!(notifier.bodies().is_empty());
    }

    #[tokio::test]
    async fn test_full_report_and_refresh_use_disjoint_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            &dir,
            "#!/bin/sh\nif [ \"$1\" = \"o\" ]; then echo 'Math 101'; else printf 'Physics 3pm\\nChem 5pm'; fi\n",
        );

        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let mut controller = controller_with(
            &script,
            Duration::from_millis(50),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        controller.start();
        // Overlap the on-demand fetch with the running refresh loop
        controller.fetch_full_report().await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        controller.stop();

        let statuses = surface.statuses();
        assert!(!statuses.is_empty());
        assert!(statuses.iter().all(|s| s == "Math 101"));

        assert_eq!(notifier.bodies(), vec!["Physics 3pm\nChem 5pm".to_string()]);
    }

    #[tokio::test]
    async fn test_restart_after_stop() {
        let surface = RecordingSurface::new();
        let notifier = RecordingNotifier::new();
        let mut controller = controller_with(
            "/bin/echo",
            Duration::from_secs(30),
            Arc::clone(&surface),
            Arc::clone(&notifier),
        );

        controller.start();
        tokio::time::sleep(Duration::from_millis(80)).await;
        controller.stop();
        let after_first = surface.statuses().len();
        assert!(after_first >= 1);

        controller.start();
        tokio::time::sleep(Duration::from_millis(80)).await;
        controller.stop();
        assert!(surface.statuses().len() > after_first);
    }
}
