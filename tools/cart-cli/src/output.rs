//! Output formatting for the CLI.

use std::sync::{Arc, Mutex};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use turbo_cart::Notifier;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    /// Most recent spinner; notices are printed around it while it ticks.
    spinner: Arc<Mutex<Option<ProgressBar>>>,
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("verbose", &self.verbose)
            .field("json", &self.json)
            .finish_non_exhaustive()
    }
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            spinner: Arc::new(Mutex::new(None)),
        }
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

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a cart notice. Shown even in JSON mode, on stderr.
    pub fn notice(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "notice": msg }));
            return;
        }
        let print = || eprintln!("{} {}", style("!").yellow().bold(), style(msg).yellow());
        match self.live_spinner() {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
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
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for a lookup in flight.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        if let Ok(mut current) = self.spinner.lock() {
            *current = Some(pb.clone());
        }
        pb
    }

    /// Spinner still drawing, if any.
    fn live_spinner(&self) -> Option<ProgressBar> {
        let current = self.spinner.lock().ok()?;
        current.as_ref().filter(|pb| !pb.is_finished()).cloned()
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

impl Notifier for Output {
    fn error(&self, message: &str) {
        self.notice(message);
    }
}

/// Format a price for display.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Shorten `s` to at most `max` characters.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(179.9), "$179.90");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_notice_tracks_running_spinner() {
        let output = Output::new(false, false);
        assert!(output.live_spinner().is_none());

        let pb = output.spinner("Checking stock...");
        assert!(output.live_spinner().is_some());
        output.clone().notice("Requested quantity out of stock");

        pb.finish_and_clear();
        assert!(output.live_spinner().is_none());
        output.notice("Error adding product");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Tênis", 10), "Tênis");
        assert_eq!(truncate("Tênis de Caminhada", 6), "Tênis…");
    }
}
