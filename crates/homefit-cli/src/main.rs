//! Homefit - match housing listings to saved preferences from the terminal.
//!
//! Users register or log in against a local credential file, enter their
//! budget, floor, room and area preferences, and browse the apartment,
//! commercial and house listings that match.

mod shell;
mod ui;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use homefit_core::{App, Config};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shell::Shell;
use ui::input::StdinInput;

/// Log file written inside the data directory
const LOG_FILE: &str = "homefit.log";

/// Filter used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "homefit", version, about = "Match housing listings to your preferences")]
struct Args {
    /// Directory holding users.csv, preferences.csv and the listing files
    #[arg(long, env = "HOMEFIT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to a file so they never interleave with prompts.
/// Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug).
fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create data directory: {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();
    Ok(guard)
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;

    // The flag overrides the data dir for this run only; it is not persisted.
    let mut effective = config.clone();
    if let Some(dir) = args.data_dir {
        effective.data_dir = Some(dir);
    }

    let _guard = init_tracing(&effective.data_dir())?;
    info!(data_dir = %effective.data_dir().display(), "Homefit starting");

    let app = App::new(&effective);
    let mut input = StdinInput;
    let mut stdout = io::stdout();
    let mut shell = Shell::new(app, config, config_path, &mut input, &mut stdout);
    let result = shell.run();

    info!(logged_in = shell.session().is_logged_in(), "Homefit shutting down");
    result
}
