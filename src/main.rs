//! Command-line front end for the shortly widget.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL and add it to the list
//! shortly shorten https://www.rust-lang.org/learn
//!
//! # Show the stored links
//! shortly list
//!
//! # Copy or delete a stored link
//! shortly copy https://shrtco.de/abc
//! shortly delete https://shrtco.de/abc
//!
//! # Forget every link
//! shortly reset
//!
//! # Prompt loop: shorten, copy and delete until an empty line
//! shortly interactive
//! ```
//!
//! See [`shortly::config`] for environment variables.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use shortly::application::services::{LinkStore, Widget};
use shortly::config::{self, Config};
use shortly::domain::repositories::KeyValueStore;
use shortly::infrastructure::clipboard::DefaultClipboard;
use shortly::infrastructure::shortener::ShrtcoClient;
use shortly::infrastructure::storage::{FileStorage, MemoryStorage};
use shortly::infrastructure::view::TerminalView;
use shortly::telemetry;

type TerminalWidget<S> = Widget<S, ShrtcoClient, TerminalView, DefaultClipboard>;

/// Shorten URLs and keep a list of your short links.
#[derive(Parser)]
#[command(name = "shortly")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keep links in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL and add it to the list
    Shorten {
        /// The URL to shorten
        url: String,
    },

    /// Show the stored links
    List,

    /// Copy a stored short link
    Copy {
        /// Short URL as shown by `list`
        short_url: String,
    },

    /// Delete a stored short link
    Delete {
        /// Short URL as shown by `list`
        short_url: String,
    },

    /// Forget every stored link
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Prompt for URLs until an empty line
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init_tracing(&config);
    config.print_summary();

    if cli.ephemeral {
        run(cli.command, &config, MemoryStorage::new()).await
    } else {
        run(
            cli.command,
            &config,
            FileStorage::new(config.storage_path.clone()),
        )
        .await
    }
}

/// Builds the widget over `storage` and dispatches the command.
async fn run<S: KeyValueStore>(command: Commands, config: &Config, storage: S) -> Result<ExitCode> {
    let api = ShrtcoClient::with_connect_timeout(&config.api_url, config.request_timeout())
        .context("Failed to build HTTP client")?;

    let widget = Widget::new(
        LinkStore::new(storage),
        Arc::new(api),
        Arc::new(TerminalView::new()),
        Arc::new(DefaultClipboard::new()),
    )
    .with_timeout(config.request_timeout());

    let succeeded = match command {
        Commands::Shorten { url } => widget.submit(&url).await.is_ok(),
        Commands::List => list_links(&widget)?,
        Commands::Copy { short_url } => report(widget.copy(&short_url)),
        Commands::Delete { short_url } => delete_link(&widget, &short_url),
        Commands::Reset { yes } => reset_links(&widget, yes)?,
        Commands::Interactive => {
            interactive(&widget).await?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints `error`'s user message for actions that do not render their own.
fn report<T>(result: Result<T, shortly::WorkflowError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e.user_message().red());
            false
        }
    }
}

fn list_links<S: KeyValueStore>(widget: &TerminalWidget<S>) -> Result<bool> {
    println!("{}", "🔗 Short links".bright_blue().bold());
    println!();

    let count = match widget.init() {
        Ok(count) => count,
        Err(e) => return Ok(report::<()>(Err(e))),
    };

    if count == 0 {
        println!("{}", "  No links yet".yellow());
        println!();
        println!("  Add one with: {} <URL>", "shortly shorten".bright_cyan());
        return Ok(true);
    }

    println!();
    println!("  Total: {}", count.to_string().bright_white().bold());
    Ok(true)
}

fn delete_link<S: KeyValueStore>(widget: &TerminalWidget<S>, short_url: &str) -> bool {
    match widget.delete(short_url) {
        Ok(true) => true,
        Ok(false) => {
            println!("{}", "  That link was not in the list".yellow());
            true
        }
        Err(e) => report::<()>(Err(e)),
    }
}

/// Clears the store after a confirmation prompt (unless `--yes`).
fn reset_links<S: KeyValueStore>(widget: &TerminalWidget<S>, skip_confirm: bool) -> Result<bool> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Forget every stored link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(true);
        }
    }

    if !report(widget.reset()) {
        return Ok(false);
    }

    println!("{}", "✅ All links cleared".green().bold());
    Ok(true)
}

/// Prompt loop over the widget.
///
/// Accepts a URL to shorten, `copy <short url>`, `delete <short url>`, or an
/// empty line to quit. Failures are rendered and the loop continues.
async fn interactive<S: KeyValueStore>(widget: &TerminalWidget<S>) -> Result<()> {
    println!("{}", "🔗 shortly".bright_blue().bold());
    println!(
        "  Enter a URL to shorten, {} or {}, empty line to quit.",
        "copy <short url>".bright_cyan(),
        "delete <short url>".bright_cyan()
    );
    println!();

    report(widget.init());

    loop {
        let line: String = Input::new()
            .with_prompt("URL")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();

        if line.is_empty() {
            break;
        }

        if let Some(short_url) = line.strip_prefix("copy ") {
            report(widget.copy(short_url.trim()));
        } else if let Some(short_url) = line.strip_prefix("delete ") {
            delete_link(widget, short_url.trim());
        } else {
            // failures are already rendered by the view
            let _ = widget.submit(line).await;
        }
    }

    Ok(())
}
