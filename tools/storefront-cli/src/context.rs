//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_cache::Cache;
use storefront_commerce::catalog::{reference_catalog, Catalog};
use storefront_commerce::StorefrontConfig;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names looked up from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        tracing::debug!(path = %config_path.display(), "config loaded");
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Storefront settings.
    pub fn storefront(&self) -> &StorefrontConfig {
        &self.config.storefront
    }

    /// The configured catalog file, or the built-in catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.config.storage.catalog_file {
            Some(file) => {
                let path = self.resolve_path(file);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("Invalid catalog: {}", path.display()))
            }
            None => Ok(reference_catalog()),
        }
    }

    /// Path of the state snapshot.
    pub fn state_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.state_file)
    }

    /// Open the persisted local store.
    pub fn open_store(&self) -> Result<Cache> {
        let path = self.state_path();
        Cache::load(&path).with_context(|| format!("Failed to open state: {}", path.display()))
    }

    /// Write the local store back to disk.
    pub fn save_store(&self, store: &Cache) -> Result<()> {
        let path = self.state_path();
        store
            .save(&path)
            .with_context(|| format!("Failed to save state: {}", path.display()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
