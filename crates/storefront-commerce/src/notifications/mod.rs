//! Toast notifications and the notification center.

mod center;
mod notification;

pub use center::{NotificationCenter, DEFAULT_BADGE_CAP, NOTIFICATIONS_KEY};
pub use notification::{time_ago, Notification, NotificationKind, Toast};
