use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::NotificationId;

/// Severity of a notification; drives its colour and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
            NotificationKind::Warning => "exclamation-triangle",
            NotificationKind::Info => "info-circle",
        }
    }

    /// Parse a kind name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

/// One entry of the notification history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Relative age label for the history panel.
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        time_ago(self.time, now)
    }
}

/// A notification to pop up right now.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notification: Notification,
    /// `None` stays until dismissed.
    pub auto_dismiss: Option<Duration>,
}

/// "Agora", "5m atrás", "3h atrás", "2d atrás", or the date after a week.
pub fn time_ago(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - time).num_seconds();

    if secs < 60 {
        "Agora".to_string()
    } else if secs < 3_600 {
        format!("{}m atrás", secs / 60)
    } else if secs < 86_400 {
        format!("{}h atrás", secs / 3_600)
    } else if secs < 604_800 {
        format!("{}d atrás", secs / 86_400)
    } else {
        time.format("%d/%m/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = now();
        assert_eq!(time_ago(now - ChronoDuration::seconds(59), now), "Agora");
        assert_eq!(time_ago(now - ChronoDuration::minutes(5), now), "5m atrás");
        assert_eq!(time_ago(now - ChronoDuration::minutes(150), now), "2h atrás");
        assert_eq!(time_ago(now - ChronoDuration::days(6), now), "6d atrás");
        assert_eq!(time_ago(now - ChronoDuration::days(7), now), "08/03/2024");
    }

    #[test]
    fn test_future_time_is_now() {
        let now = now();
        assert_eq!(time_ago(now + ChronoDuration::minutes(3), now), "Agora");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(NotificationKind::parse(" Warning "), Some(NotificationKind::Warning));
        assert_eq!(NotificationKind::parse("fatal"), None);
        assert_eq!(NotificationKind::Error.icon(), "exclamation-circle");
    }

    #[test]
    fn test_kind_serialized_as_type() {
        let notification = Notification {
            id: NotificationId::new(1),
            title: "Oi".into(),
            message: "Olá".into(),
            kind: NotificationKind::Success,
            time: now(),
            read: false,
        };
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["id"], 1);
    }
}
