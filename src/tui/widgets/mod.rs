//! Reusable widgets for the TUI

pub mod input;
pub mod notification;

pub use input::TextInput;
pub use notification::{Notification, NotificationKind, NotificationWidget, NOTIFICATION_DURATION};
