//! Display surface trait definitions.
//!
//! The controller never talks to stdout or the desktop directly; both
//! surfaces are injected, which keeps the refresh logic testable against
//! recording fakes.

/// Persistent status area: receives the formatted status text on every
/// refresh cycle.
pub trait StatusSurface: Send + Sync {
    /// Replace the currently displayed status text.
    fn set_status(&self, text: &str);
}

/// One-shot notification area: receives the raw full-schedule text on
/// demand.
pub trait NotificationSurface: Send + Sync {
    /// Present the given text as a user-dismissible notification.
    fn notify(&self, body: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockSurface {
        last: Mutex<Option<String>>,
    }

    impl StatusSurface for MockSurface {
        fn set_status(&self, text: &str) {
            *self.last.lock().unwrap() = Some(text.to_string());
        }
    }

    impl NotificationSurface for MockSurface {
        fn notify(&self, body: &str) {
            *self.last.lock().unwrap() = Some(body.to_string());
        }
    }

    #[test]
    fn test_surfaces_are_object_safe() {
        let mock = MockSurface {
            last: Mutex::new(None),
        };

        let status: &dyn StatusSurface = &mock;
        status.set_status("Math 101");
        assert_eq!(mock.last.lock().unwrap().as_deref(), Some("Math 101"));

        let notification: &dyn NotificationSurface = &mock;
        notification.notify("Physics 3pm");
        assert_eq!(mock.last.lock().unwrap().as_deref(), Some("Physics 3pm"));
    }
}
