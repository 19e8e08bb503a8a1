//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::StorefrontConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings (`[search]`, `[notifications]`, `[compare]`, `[features]`).
    #[serde(flatten)]
    pub storefront: StorefrontConfig,

    /// Where state and catalog live on disk.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot file holding the compare basket and notifications.
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// JSON catalog to load instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<String>,
}

fn default_state_file() -> String {
    ".storefront/state.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            catalog_file: None,
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[search]
page_size = 12
suggestion_min_chars = 3
search_page = "search.html"
suggestions = [
    "iPhone 15 Pro Max",
    "Notebook Dell",
    "Smart TV 65\"",
    "Tênis Nike",
    "AirPods Pro",
]

[notifications]
toast_duration_ms = 5000
badge_cap = 99
storage_key = "notifications"

[compare]
max_products = 4
storage_key = "compareList"

[features]
notifications = true
search_suggestions = true
compare_button = true

[storage]
state_file = ".storefront/state.json"
# catalog_file = "catalog.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed.storefront, StorefrontConfig::default());
        assert_eq!(parsed.storage.state_file, ".storefront/state.json");
        assert!(parsed.storage.catalog_file.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let parsed: CliConfig = toml::from_str(
            r#"
            [search]
            page_size = 6

            [storage]
            catalog_file = "catalog.json"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.storefront.search.page_size, 6);
        assert_eq!(parsed.storefront.compare.max_products, 4);
        assert_eq!(parsed.storage.catalog_file.as_deref(), Some("catalog.json"));
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        std::fs::write(
            &path,
            r#"{"notifications": {"badge_cap": 9}, "storage": {"state_file": "state.json"}}"#,
        )
        .unwrap();

        let loaded = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.storefront.notifications.badge_cap, 9);
        assert_eq!(loaded.storefront.notifications.toast_duration_ms, 5000);
        assert_eq!(loaded.storage.state_file, "state.json");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
