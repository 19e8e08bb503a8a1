//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    let config = ctx.storefront();

    ctx.output.info("[search]");
    ctx.output.kv("page_size", &config.search.page_size.to_string());
    ctx.output.kv(
        "suggestion_min_chars",
        &config.search.suggestion_min_chars.to_string(),
    );
    ctx.output.kv("search_page", &config.search.search_page);
    ctx.output.kv("suggestions", &config.search.suggestions.join(", "));

    ctx.output.info("[notifications]");
    ctx.output.kv(
        "toast_duration_ms",
        &config.notifications.toast_duration_ms.to_string(),
    );
    ctx.output.kv("badge_cap", &config.notifications.badge_cap.to_string());
    ctx.output.kv("storage_key", &config.notifications.storage_key);

    ctx.output.info("[compare]");
    ctx.output.kv("max_products", &config.compare.max_products.to_string());
    ctx.output.kv("storage_key", &config.compare.storage_key);

    ctx.output.info("[features]");
    ctx.output.kv("notifications", &config.features.notifications.to_string());
    ctx.output.kv(
        "search_suggestions",
        &config.features.search_suggestions.to_string(),
    );
    ctx.output.kv("compare_button", &config.features.compare_button.to_string());

    ctx.output.info("[storage]");
    ctx.output.kv("state_file", &ctx.config.storage.state_file);
    if let Some(ref catalog) = ctx.config.storage.catalog_file {
        ctx.output.kv("catalog_file", catalog);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}
