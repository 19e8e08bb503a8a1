//! Storefront CLI - Drive the storefront core from a terminal.
//!
//! Commands:
//! - `storefront search` - Filter, sort and page the catalog
//! - `storefront suggest` - Search-box suggestions for typed text
//! - `storefront compare` - Score products side by side and pick a winner
//! - `storefront compare-list` - Manage the saved compare basket
//! - `storefront notify` - Show and manage notifications
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CompareArgs, CompareListArgs, ConfigArgs, NotifyArgs, SearchArgs, SuggestArgs,
};

/// Storefront CLI - Search, compare and notify against the storefront catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search(SearchArgs),

    /// Suggest searches for typed text
    Suggest(SuggestArgs),

    /// Compare up to four products
    Compare(CompareArgs),

    /// Manage the saved compare basket
    CompareList(CompareListArgs),

    /// Show and manage notifications
    Notify(NotifyArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "storefront=debug"
    } else {
        "storefront=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Suggest(args) => commands::suggest::run(args, &ctx),
        Commands::Compare(args) => commands::compare::run(args, &ctx),
        Commands::CompareList(args) => commands::compare_list::run(args, &ctx),
        Commands::Notify(args) => commands::notify::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
