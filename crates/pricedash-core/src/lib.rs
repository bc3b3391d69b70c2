//! # pricedash-core
//!
//! Core errors and utilities shared by the pricedash crates.
//!
//! This crate provides:
//! - [`DashError`] - Error type for startup and configuration failures
//! - [`logging`] - Tracing setup and log file locations
//!
//! ## Example
//!
//! ```no_run
//! use pricedash_core::{DashError, Result, logging};
//!
//! fn main() -> pricedash_core::Result<()> {
//!     let _guard = logging::init_logging(None, false)?;
//!
//!     let config_path = std::path::Path::new("/etc/pricedash/config.yaml");
//!     if !config_path.exists() {
//!         return Err(DashError::internal("no config"));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{DashError, Result};
pub use logging::{LogGuard, init_logging};
