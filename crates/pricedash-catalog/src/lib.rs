//! # pricedash-catalog
//!
//! Model pricing catalog and the chart logic built on it.
//!
//! This crate provides:
//! - [`Catalog`] - The compiled-in list of models and prices
//! - [`SelectionState`] - Which models are visible, with toggle rules
//! - [`derive_chart_data`] / [`axis_bound`] - Rows and value-axis bound for the chart
//! - [`format_tooltip`] - Hover tooltip formatting
//! - [`Dashboard`] - State owner that keeps all of the above in step
//!
//! ## Example
//!
//! ```
//! use pricedash_catalog::{Catalog, Dashboard, SettingsControls};
//!
//! fn main() -> pricedash_catalog::Result<()> {
//!     let mut dashboard = Dashboard::new(Catalog::builtin()?);
//!     assert_eq!(dashboard.axis_bound(), 60.0);
//!
//!     dashboard.select_all();
//!     assert_eq!(dashboard.axis_bound(), 600.0);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod selection;
pub mod tooltip;

pub use catalog::Catalog;
pub use chart::{axis_bound, axis_ticks, derive_chart_data};
pub use dashboard::{Dashboard, SettingsControls};
pub use error::{CatalogError, Result};
pub use models::{DisplayMode, ModelRecord, Provider, Series};
pub use selection::{SelectionState, ToggleOutcome};
pub use tooltip::{Tooltip, TooltipEntry, TooltipLine, format_dollar, format_tooltip, payload_for};
