//! Storefront settings.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use serde::{Deserialize, Serialize};

use crate::compare::{COMPARE_LIST_KEY, COMPARE_SLOTS};
use crate::notifications::{DEFAULT_BADGE_CAP, NOTIFICATIONS_KEY};
use crate::search::{DEFAULT_PAGE_SIZE, DEFAULT_SUGGESTIONS};

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Search page settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Notification center settings.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Comparison settings.
    #[serde(default)]
    pub compare: CompareConfig,

    /// Optional page enhancements.
    #[serde(default)]
    pub features: FeatureFlags,
}

/// Search page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Products per result page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Characters typed before suggestions appear.
    #[serde(default = "default_suggestion_min_chars")]
    pub suggestion_min_chars: usize,

    /// Suggestion list offered under the search box.
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,

    /// Page that search links point to.
    #[serde(default = "default_search_page")]
    pub search_page: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_suggestion_min_chars() -> usize {
    3
}

fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

fn default_search_page() -> String {
    "search.html".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            suggestion_min_chars: default_suggestion_min_chars(),
            suggestions: default_suggestions(),
            search_page: default_search_page(),
        }
    }
}

/// Notification center settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays up; 0 keeps it until dismissed.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Largest unread count shown on the badge.
    #[serde(default = "default_badge_cap")]
    pub badge_cap: usize,

    /// Storage key of the history.
    #[serde(default = "default_notifications_key")]
    pub storage_key: String,
}

fn default_toast_duration_ms() -> u64 {
    5_000
}

fn default_badge_cap() -> usize {
    DEFAULT_BADGE_CAP
}

fn default_notifications_key() -> String {
    NOTIFICATIONS_KEY.to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            badge_cap: default_badge_cap(),
            storage_key: default_notifications_key(),
        }
    }
}

/// Comparison settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Capacity of the compare basket.
    #[serde(default = "default_max_products")]
    pub max_products: usize,

    /// Storage key of the basket.
    #[serde(default = "default_compare_key")]
    pub storage_key: String,
}

fn default_max_products() -> usize {
    COMPARE_SLOTS
}

fn default_compare_key() -> String {
    COMPARE_LIST_KEY.to_string()
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_products: default_max_products(),
            storage_key: default_compare_key(),
        }
    }
}

/// Switches for the optional enhancements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub notifications: bool,

    #[serde(default = "default_true")]
    pub search_suggestions: bool,

    #[serde(default = "default_true")]
    pub compare_button: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            notifications: true,
            search_suggestions: true,
            compare_button: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config: StorefrontConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.search.page_size, 12);
        assert_eq!(config.search.suggestions.len(), 5);
        assert_eq!(config.compare.max_products, 4);
        assert_eq!(config.notifications.storage_key, "notifications");
        assert!(config.features.compare_button);
    }

    #[test]
    fn test_partial_override() {
        let config: StorefrontConfig = serde_json::from_str(
            r#"{"search": {"page_size": 24}, "features": {"notifications": false}}"#,
        )
        .unwrap();
        assert_eq!(config.search.page_size, 24);
        assert_eq!(config.search.suggestion_min_chars, 3);
        assert!(!config.features.notifications);
        assert!(config.features.search_suggestions);
    }
}
