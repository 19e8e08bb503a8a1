//! CLI command implementations.

pub mod compare;
pub mod compare_list;
pub mod config;
pub mod notify;
pub mod search;
pub mod suggest;

use clap::{Args, Subcommand};
use storefront_commerce::search::FilterInputs;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text, matched against name and category.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category to include (repeatable), e.g. "eletronicos" or "sports".
    #[arg(short = 'C', long = "category")]
    pub categories: Vec<String>,

    /// Minimum price, as typed (comma or dot decimals).
    #[arg(long, default_value = "")]
    pub min_price: String,

    /// Maximum price, as typed.
    #[arg(long, default_value = "")]
    pub max_price: String,

    /// Checked rating threshold (repeatable); the smallest applies.
    #[arg(long = "rating")]
    pub ratings: Vec<String>,

    /// Checked discount threshold in percent (repeatable); the smallest applies.
    #[arg(long = "discount")]
    pub discounts: Vec<String>,

    /// Only products with free shipping.
    #[arg(long)]
    pub free_shipping: bool,

    /// Sort order: relevance, price-asc, price-desc, rating, discount, newest.
    #[arg(short, long, default_value = "relevance")]
    pub sort: String,

    /// Result page to show.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Page URL or query string to read `q` from, e.g. "search.html?q=nike".
    #[arg(long)]
    pub url: Option<String>,
}

impl SearchArgs {
    /// The flags as a snapshot of the search page widgets.
    pub fn inputs(&self) -> FilterInputs {
        FilterInputs {
            query: self.query.clone(),
            categories: self.categories.clone(),
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            ratings: self.ratings.clone(),
            discounts: self.discounts.clone(),
            free_shipping: self.free_shipping,
            sort: self.sort.clone(),
        }
    }
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Text typed so far.
    pub text: String,
}

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Product ids, one per slot (default: the saved compare basket).
    pub ids: Vec<String>,
}

/// Arguments for the compare-list command.
#[derive(Args)]
pub struct CompareListArgs {
    #[command(subcommand)]
    pub command: CompareListCommand,
}

#[derive(Subcommand)]
pub enum CompareListCommand {
    /// Add a product to the basket.
    Add {
        /// Product id.
        id: String,
    },
    /// Remove a product from the basket.
    Remove {
        /// Product id.
        id: String,
    },
    /// Show the basket.
    Show,
    /// Empty the basket.
    Clear,
}

/// Arguments for the notify command.
#[derive(Args)]
pub struct NotifyArgs {
    #[command(subcommand)]
    pub command: NotifyCommand,
}

#[derive(Subcommand)]
pub enum NotifyCommand {
    /// Show a notification and record it.
    Show {
        /// Notification title.
        title: String,

        /// Notification message.
        message: String,

        /// Kind: success, error, warning, info.
        #[arg(short, long, default_value = "info")]
        kind: String,

        /// Auto-dismiss after this many milliseconds (0 keeps it).
        #[arg(short, long)]
        duration: Option<u64>,
    },
    /// List the notification history.
    List,
    /// Mark one notification as read.
    Read {
        /// Notification id.
        id: String,
    },
    /// Mark every notification as read.
    ReadAll,
    /// Delete the notification history.
    Clear,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
