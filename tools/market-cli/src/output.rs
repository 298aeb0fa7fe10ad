//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use market_catalog::search::SearchResultItem;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
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

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print ranked results as a table.
    pub fn results(&self, items: &[SearchResultItem]) {
        if self.json {
            return;
        }
        const WIDTHS: [usize; 5] = [12, 28, 10, 20, 6];
        self.table_row(&["ID", "PRODUCT", "PRICE", "VENDOR", "RATING"], &WIDTHS);
        for item in items {
            let name = match &item.unit {
                Some(unit) => format!("{} /{}", item.name, unit),
                None => item.name.clone(),
            };
            let rating = format!("{:.1}", item.vendor_rating);
            let price = item.price.display();
            self.table_row(
                &[item.id.as_str(), &name, &price, &item.vendor_name, &rating],
                &WIDTHS,
            );
            if item.low_price {
                println!("  {}", style("  ↳ best price").green());
            }
            if let Some(discount) = &item.discount {
                println!("  {}", style(format!("  ↳ {}", discount)).yellow());
            }
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json || !console::user_attended_stderr() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) =
            ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Render a 0-5 rating as stars.
pub fn stars(rating: f64) -> String {
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.6), "★★★★★");
        assert_eq!(stars(3.2), "★★★☆☆");
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
        assert_eq!(stars(9.0), "★★★★★");
    }
}
