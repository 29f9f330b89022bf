//! jot - A minimal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! jot notes.txt
//! JOT_LINE_NUMBERS=1 jot src/main.rs
//! JOT_LOG_FILE=jot.log RUST_LOG=debug jot notes.txt
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jot::app::App;
use jot::config::Config;

/// A minimal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "jot", about, long_about = None)]
struct Cli {
    /// File to edit (created on first save if it does not exist)
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Install the tracing subscriber.
///
/// The terminal is in raw mode while editing, so logs only go to stderr
/// when `RUST_LOG` asks for them. A log file defaults to `info`.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Invalid configuration")?;

    init_logging(config.log_file.as_deref())?;
    tracing::info!(
        file = %cli.file.display(),
        line_numbers = config.line_numbers,
        history_limit = ?config.history_limit,
        "starting jot"
    );

    let mut app = App::new(cli.file)
        .with_line_numbers(config.line_numbers)
        .with_history_limit(config.history_limit);

    app.run().context("Application error")
}
