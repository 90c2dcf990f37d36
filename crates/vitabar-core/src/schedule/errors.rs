use crate::errors::VitabarError;

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Failed to launch '{command}': {source}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {code:?}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("'{command}' produced non-UTF-8 output")]
    InvalidOutput { command: String },
}

impl VitabarError for ScheduleError {
    fn error_code(&self) -> &'static str {
        match self {
            ScheduleError::LaunchFailed { .. } => "SCHEDULE_LAUNCH_FAILED",
            ScheduleError::CommandFailed { .. } => "SCHEDULE_COMMAND_FAILED",
            ScheduleError::InvalidOutput { .. } => "SCHEDULE_INVALID_OUTPUT",
        }
    }

    fn is_user_error(&self) -> bool {
        // A missing binary is almost always a setup problem on the user's end
        matches!(self, ScheduleError::LaunchFailed { .. })
    }
}
