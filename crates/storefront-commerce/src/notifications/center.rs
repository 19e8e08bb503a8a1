//! Notification history with read state and an unread badge.

use std::time::Duration;

use chrono::{DateTime, Utc};
use storefront_cache::Cache;

use crate::error::CommerceError;
use crate::ids::NotificationId;
use crate::notifications::{Notification, NotificationKind, Toast};

/// Storage key used by default.
pub const NOTIFICATIONS_KEY: &str = "notifications";

/// Default cap on the unread badge.
pub const DEFAULT_BADGE_CAP: usize = 99;

/// Newest-first history of shown notifications.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    badge_cap: usize,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_badge_cap(DEFAULT_BADGE_CAP)
    }

    /// Unread counts above `badge_cap` show as `"{cap}+"`.
    pub fn with_badge_cap(badge_cap: usize) -> Self {
        Self {
            notifications: Vec::new(),
            badge_cap,
        }
    }

    /// Load the history stored under `key`, empty when absent.
    pub fn load(cache: &Cache, key: &str, badge_cap: usize) -> Result<Self, CommerceError> {
        let mut center = Self::with_badge_cap(badge_cap);
        center.notifications = cache.get(key)?.unwrap_or_default();
        tracing::debug!(key, count = center.notifications.len(), "notifications loaded");
        Ok(center)
    }

    /// Write the history under `key`.
    pub fn save(&self, cache: &Cache, key: &str) -> Result<(), CommerceError> {
        cache.set(key, &self.notifications)?;
        tracing::debug!(key, count = self.notifications.len(), "notifications saved");
        Ok(())
    }

    /// Show a notification now. `duration_ms` of 0 keeps the toast until dismissed.
    pub fn show(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u64,
    ) -> Toast {
        self.show_at(title, message, kind, duration_ms, Utc::now())
    }

    /// [`show`](Self::show) with an explicit timestamp.
    pub fn show_at(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u64,
        time: DateTime<Utc>,
    ) -> Toast {
        let notification = Notification {
            id: self.next_id(),
            title: title.into(),
            message: message.into(),
            kind,
            time,
            read: false,
        };
        tracing::info!(id = %notification.id, kind = kind.as_str(), title = %notification.title, "notification shown");

        self.notifications.insert(0, notification.clone());
        Toast {
            notification,
            auto_dismiss: (duration_ms > 0).then(|| Duration::from_millis(duration_ms)),
        }
    }

    /// Mark one notification read. Returns false for an unknown id.
    pub fn mark_as_read(&mut self, id: NotificationId) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    pub fn clear_all(&mut self) {
        self.notifications.clear();
    }

    /// History, newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Badge text, hidden when nothing is unread.
    pub fn badge(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            n if n > self.badge_cap => Some(format!("{}+", self.badge_cap)),
            n => Some(n.to_string()),
        }
    }

    /// One past the largest stored id, or the smallest free id once that
    /// would overflow.
    fn next_id(&self) -> NotificationId {
        let taken = |id: u64| self.notifications.iter().any(|n| n.id.get() == id);
        let max = self
            .notifications
            .iter()
            .map(|n| n.id.get())
            .max()
            .unwrap_or(0);
        let id = match max.checked_add(1) {
            Some(id) => id,
            None => (1..u64::MAX).find(|&id| !taken(id)).unwrap_or(max),
        };
        NotificationId::new(id)
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
