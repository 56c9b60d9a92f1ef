//! Output formatting for the demo driver.

use console::style;
use serde_json::json;

/// Output handler for console messages.
#[derive(Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print a section heading.
    pub fn section(&self, title: &str) {
        if self.json {
            println!("{}", json!({ "section": title }));
            return;
        }
        println!();
        println!("{}", style(title).bold().underlined());
    }

    /// Print an informational step.
    pub fn info(&self, msg: &str) {
        if self.json {
            println!("{}", json!({ "info": msg }));
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a successful operation with its result.
    pub fn success(&self, msg: &str) {
        if self.json {
            println!("{}", json!({ "ok": msg }));
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an expected failure.
    pub fn failure(&self, msg: &str) {
        if self.json {
            println!("{}", json!({ "error": msg }));
            return;
        }
        println!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a listed item.
    pub fn item(&self, value: &impl serde::Serialize, display: &str) {
        if self.json {
            match serde_json::to_string(value) {
                Ok(line) => println!("{}", line),
                Err(_) => println!("{}", json!({ "item": display })),
            }
            return;
        }
        println!("  {} {}", style("-").dim(), display);
    }
}
