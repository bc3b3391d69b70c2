//! Terminal UI for pricedash.
//!
//! This crate provides the Ratatui-based pricing dashboard: a horizontal bar
//! chart of per-million-token prices with a settings panel for choosing which
//! models and price series are shown.
//!
//! ## Hotkeys
//!
//! - `s` - Open/close settings
//! - `a` - Select all models
//! - `d` - Default selection
//! - `x` - Deselect all
//! - `m` - Cycle display mode
//! - `t` - Cycle theme
//! - `?` or `h` - Help
//! - `q` - Quit
//! - `Tab` - Switch chart/settings focus
//! - `Esc` - Close settings, or quit

pub mod app;
pub mod chart_panel;
pub mod config;
pub mod event;
pub mod settings_panel;
pub mod theme;
pub mod view;

pub use app::{App, AppResult};
pub use config::DashboardConfig;
pub use theme::{Theme, ThemeManager, ThemeName};
pub use view::{FocusPanel, LayoutMode};
