//! Colored terminal rendering of the link list.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::gateways::LinkView;
use colored::*;

/// Renders links and messages to the terminal.
///
/// Terminal output is append-only, so "front of the list" means the most
/// recently printed line: the newest link is the one closest to the prompt.
/// Links go to stdout; the loading indicator and errors go to stderr.
#[derive(Debug, Default)]
pub struct TerminalView {
    loading: AtomicBool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkView for TerminalView {
    fn render_link(&self, original_url: &str, short_url: &str) {
        println!(
            "  {}  {}  {}",
            original_url.bright_black(),
            "→".bright_black(),
            short_url.cyan().bold()
        );
    }

    fn remove_link(&self, short_url: &str) {
        println!("  {} {}", "✗ Removed".red(), short_url.bright_black());
    }

    fn render_loading_indicator(&self) {
        if !self.loading.swap(true, Ordering::AcqRel) {
            eprint!("{}", "⏳ Shortening...".yellow());
            let _ = io::stderr().flush();
        }
    }

    fn remove_loading_indicator(&self) {
        if self.loading.swap(false, Ordering::AcqRel) {
            // erase the indicator line
            eprint!("\r\x1b[2K");
            let _ = io::stderr().flush();
        }
    }

    fn render_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    // Errors are printed inline and scroll away; nothing to clear.
    fn clear_error(&self) {}

    // The prompt is re-read for every submission.
    fn clear_input(&self) {}

    // Submissions run one at a time at the prompt.
    fn set_submit_enabled(&self, _enabled: bool) {}

    fn mark_copied(&self, short_url: &str) {
        println!("  {} {}", "✓ Copied!".green().bold(), short_url.cyan());
    }
}
