//! Logging infrastructure for pricedash.
//!
//! Structured logging with the `tracing` ecosystem. While the dashboard is
//! running the terminal belongs to ratatui, so events go to a JSON lines
//! file instead of stderr.
//!
//! ## Features
//!
//! - JSON lines format for machine parsing
//! - Daily rolling file output to `~/.pricedash/logs/pricedash.log`
//! - `-v` flag support for verbose logging, `RUST_LOG` override
//!
//! ## Example
//!
//! ```no_run
//! use pricedash_core::logging;
//!
//! let _guard = logging::init_logging(None, false).expect("logging init");
//!
//! tracing::info!("pricedash started");
//! tracing::debug!(model_id = "grok-3", "toggled");
//! ```

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{DashError, Result};

/// Name of the per-user pricedash directory under `$HOME`.
pub const APP_DIR: &str = ".pricedash";

/// Guard that must be held to ensure log flushing on shutdown.
///
/// Keep this guard alive for the lifetime of the application.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the pricedash logging system.
///
/// # Arguments
///
/// * `log_dir` - Optional custom log directory. Defaults to `~/.pricedash/logs/`
/// * `verbose` - If true, sets log level to DEBUG. Otherwise uses INFO.
///
/// # Returns
///
/// A [`LogGuard`] that must be held for the application lifetime so the
/// non-blocking writer flushes on shutdown.
pub fn init_logging(log_dir: Option<PathBuf>, verbose: bool) -> Result<LogGuard> {
    let log_dir = match log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };

    std::fs::create_dir_all(&log_dir).map_err(|e| DashError::DirectoryCreation {
        path: log_dir.clone(),
        source: e,
    })?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "pricedash.log");
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pricedash={default_level}")));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_current_span(true)
        .with_span_list(true)
        .with_file(verbose)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| DashError::internal(format!("logging already initialized: {e}")))?;

    tracing::debug!(log_dir = %log_dir.display(), verbose, "logging initialized");

    Ok(LogGuard {
        _file_guard: Some(file_guard),
    })
}

/// Initialize minimal console-only logging for testing.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Get the per-user pricedash directory.
///
/// Returns `~/.pricedash/`
pub fn app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| DashError::Internal {
        message: "home directory could not be determined".into(),
    })?;

    Ok(home.join(APP_DIR))
}

/// Get the default log directory path.
///
/// Returns `~/.pricedash/logs/`
pub fn default_log_dir() -> Result<PathBuf> {
    Ok(app_dir()?.join("logs"))
}

/// Log a selection-state transition.
///
/// # Example
///
/// ```ignore
/// log_selection_event!("toggle", model_id = "grok-3", enabled = 12);
/// log_selection_event!("select_all", enabled = 19);
/// ```
#[macro_export]
macro_rules! log_selection_event {
    ($action:expr) => {
        tracing::debug!(
            target: "pricedash::selection",
            action = $action,
            "selection changed"
        )
    };
    ($action:expr, $($field:tt)*) => {
        tracing::debug!(
            target: "pricedash::selection",
            action = $action,
            $($field)*,
            "selection changed"
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_log_dir() {
        let home = tempfile::tempdir().unwrap();
        // SAFETY: serialized with every other test that touches HOME
        unsafe { std::env::set_var("HOME", home.path()) };

        assert_eq!(app_dir().unwrap(), home.path().join(".pricedash"));
        assert_eq!(
            default_log_dir().unwrap(),
            home.path().join(".pricedash").join("logs")
        );
    }

    #[test]
    #[serial]
    fn test_init_logging_creates_log_dir() {
        let root = tempfile::tempdir().unwrap();
        let log_dir = root.path().join("nested").join("logs");

        // A subscriber from another test may already be installed; the
        // directory is created before registration either way.
        match init_logging(Some(log_dir.clone()), true) {
            Ok(_guard) => {}
            Err(e) => assert!(matches!(e, DashError::Internal { .. }), "unexpected: {e}"),
        }
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_init_logging_reports_unusable_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let log_dir = file.path().join("logs");

        let err = match init_logging(Some(log_dir.clone()), false) {
            Ok(_) => panic!("log dir under a regular file should fail"),
            Err(e) => e,
        };
        match &err {
            DashError::DirectoryCreation { path, .. } => assert_eq!(path, &log_dir),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!err.is_fatal());
    }

    #[test]
    #[serial]
    fn test_init_test_logging() {
        init_test_logging();
        log_selection_event!("deselect_all");
        log_selection_event!("toggle", model_id = "grok-3", enabled = 3usize);
    }
}
