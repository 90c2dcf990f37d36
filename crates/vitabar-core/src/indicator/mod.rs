//! The polling indicator: a repeating refresh loop that reflects the
//! ongoing class on a status surface, plus an on-demand full-schedule
//! fetch that reports through a notification surface.

pub mod controller;
pub mod surfaces;
pub mod traits;

pub use controller::PollController;
pub use surfaces::{DesktopNotifier, StdoutSurface};
pub use traits::{NotificationSurface, StatusSurface};
