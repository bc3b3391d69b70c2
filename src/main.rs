//! pricedash - AI Model Pricing Dashboard
//!
//! A terminal dashboard comparing input and output prices per million tokens
//! across popular AI models.
//!
//! ## Usage
//!
//! ```bash
//! # Start the dashboard
//! pricedash
//!
//! # With verbose logging
//! pricedash -v
//!
//! # With a custom config file and log directory
//! pricedash --config ./pricedash.yaml --log-dir /tmp/pricedash-logs/
//! ```

use std::io::Write;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pricedash_catalog::Catalog;
use pricedash_core::{DashError, LogGuard, init_logging};
use pricedash_tui::{App, DashboardConfig};
use tracing::{error, info};

/// AI Model Pricing Dashboard
///
/// Compare per-million-token input and output prices across AI models.
#[derive(Parser, Debug)]
#[command(name = "pricedash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (increases log level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for log files (defaults to ~/.pricedash/logs/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.pricedash/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; a log directory problem leaves the dashboard usable
    let _guard = match keep_running_without_logs(setup_logging(&cli)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            if let Some(hint) = e.guidance() {
                eprintln!("  {hint}");
            }
            return ExitCode::from(1);
        }
    };

    let app = match build_app(&cli) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %format!("{e:#}"), "startup failed");
            eprintln!("Error: {e:#}");
            if let Some(hint) = e.downcast_ref::<DashError>().and_then(DashError::guidance) {
                eprintln!("  {hint}");
            }
            return ExitCode::from(2);
        }
    };

    // Install panic hook to ensure terminal cleanup
    install_panic_hook();

    info!("Starting pricedash");

    match run_app(app) {
        Ok(()) => {
            info!("pricedash exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = restore_terminal();
            error!("pricedash error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Install a panic hook that restores the terminal before printing the panic message.
fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Restore terminal to its normal state.
fn restore_terminal() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();

    let _ = crossterm::terminal::disable_raw_mode();
    crossterm::execute!(
        stdout,
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    stdout.flush()?;

    Ok(())
}

/// Set up logging based on CLI arguments.
fn setup_logging(cli: &Cli) -> pricedash_core::Result<LogGuard> {
    let debug = cli.verbose > 0;
    init_logging(cli.log_dir.clone(), debug)
}

/// Downgrade a non-fatal logging failure to "no log file".
fn keep_running_without_logs(
    result: pricedash_core::Result<LogGuard>,
) -> pricedash_core::Result<Option<LogGuard>> {
    match result {
        Ok(guard) => Ok(Some(guard)),
        Err(e) if !e.is_fatal() => {
            eprintln!("Warning: logging disabled: {e}");
            if let Some(hint) = e.guidance() {
                eprintln!("  {hint}");
            }
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load config and catalog, then build the app.
fn build_app(cli: &Cli) -> anyhow::Result<App> {
    let config = DashboardConfig::load(cli.config.as_deref())
        .context("could not load dashboard configuration")?;
    let catalog = Catalog::builtin().context("built-in model catalog is invalid")?;

    info!(
        models = catalog.len(),
        theme = config.theme.display_name(),
        mode = %config.display_mode,
        "startup configuration"
    );
    Ok(App::new(catalog, &config))
}

/// Run the TUI application.
fn run_app(mut app: App) -> pricedash_core::Result<()> {
    app.run().map_err(|e| DashError::TerminalInit {
        message: e.to_string(),
    })
}
