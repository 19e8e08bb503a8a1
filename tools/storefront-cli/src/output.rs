//! Output formatting for the CLI.

use console::style;
use storefront_commerce::catalog::StockStatus;
use storefront_commerce::notifications::NotificationKind;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad(col, *width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Left-align `text` in `width` columns, counting characters rather than bytes.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Coloured stock label.
pub fn stock_badge(stock: StockStatus) -> String {
    match stock {
        StockStatus::Available => style(stock.label()).green().to_string(),
        StockStatus::Low => style(stock.label()).yellow().to_string(),
        StockStatus::Out => style(stock.label()).red().to_string(),
    }
}

/// Coloured marker for a notification kind.
pub fn kind_badge(kind: NotificationKind) -> String {
    match kind {
        NotificationKind::Success => style("✓").green().to_string(),
        NotificationKind::Error => style("✗").red().to_string(),
        NotificationKind::Warning => style("⚠").yellow().to_string(),
        NotificationKind::Info => style("ℹ").blue().to_string(),
    }
}

/// Stars for a 0-5 rating, e.g. "★★★★½".
pub fn star_string(rating: f64) -> String {
    let stars = storefront_commerce::catalog::StarRating::from_rating(rating);
    let mut out = "★".repeat(stars.full as usize);
    if stars.half {
        out.push('½');
    }
    out.push_str(&"☆".repeat(stars.empty as usize));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_counts_chars() {
        assert_eq!(pad("Sofá", 6), "Sofá  ");
        assert_eq!(pad("longer text", 4), "longer text");
    }

    #[test]
    fn test_star_string() {
        assert_eq!(star_string(4.5), "★★★★½");
        assert_eq!(star_string(4.0), "★★★★☆");
        assert_eq!(star_string(5.0), "★★★★★");
    }
}
