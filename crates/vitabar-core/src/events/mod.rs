use tracing::{error, info};

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Logged once when the indicator loop is brought up, so bar integrations
/// can be debugged from the journal alone.
pub fn log_indicator_session(command: &str, interval_secs: u64) {
    info!(
        event = "core.app.indicator_session_started",
        command = command,
        interval_secs = interval_secs,
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}
