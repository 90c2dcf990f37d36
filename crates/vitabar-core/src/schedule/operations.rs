use std::process::Command;

use tracing::{debug, info, warn};

use crate::schedule::errors::ScheduleError;
use crate::schedule::types::ScheduleQuery;

/// Label shown on the status surface when no class is ongoing, including
/// when polling failed and degraded to an empty result.
pub const FALLBACK_LABEL: &str = "No ongoing classes";

/// Invoke the external timetable command in the given query mode.
///
/// Blocks until the subprocess exits and returns its stdout. Callers on an
/// async runtime should wrap this in `spawn_blocking`.
pub fn run_query(command: &str, query: ScheduleQuery) -> Result<String, ScheduleError> {
    debug!(
        event = "core.schedule.query_started",
        command = command,
        mode = %query,
    );

    let output = Command::new(command)
        .arg(query.arg())
        .output()
        .map_err(|e| ScheduleError::LaunchFailed {
            command: command.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(ScheduleError::CommandFailed {
            command: command.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| ScheduleError::InvalidOutput {
        command: command.to_string(),
    })?;

    info!(
        event = "core.schedule.query_completed",
        command = command,
        mode = %query,
        bytes = stdout.len(),
    );

    Ok(stdout)
}

/// Poll the currently ongoing class, degrading all failures to an empty
/// result.
///
/// Launch failures and non-zero exits are logged here and never propagate;
/// the empty string formats to [`FALLBACK_LABEL`] downstream.
pub fn poll_ongoing(command: &str) -> String {
    match run_query(command, ScheduleQuery::Ongoing) {
        Ok(stdout) => stdout,
        Err(e) => {
            warn!(
                event = "core.schedule.poll_failed",
                command = command,
                error = %e,
            );
            String::new()
        }
    }
}

/// Format raw subprocess output for the status surface.
///
/// Trimmed-empty input maps to the fixed fallback label; anything else is
/// returned trimmed, verbatim.
pub fn format_for_display(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        FALLBACK_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}
