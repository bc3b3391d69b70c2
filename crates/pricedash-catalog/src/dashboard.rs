//! State owner for the pricing chart.
//!
//! [`Dashboard`] holds the catalog, the selection and the display mode, and
//! keeps the derived rows and axis bound in step with them. Every mutating
//! call recomputes both projections before returning, so readers never see
//! rows that disagree with the selection.

use crate::catalog::Catalog;
use crate::chart::{axis_bound, derive_chart_data};
use crate::models::{DisplayMode, ModelRecord};
use crate::selection::{SelectionState, ToggleOutcome};
use crate::tooltip::{Tooltip, format_tooltip, payload_for};

/// Operations the settings panel needs from whoever owns the selection.
pub trait SettingsControls {
    /// All models in catalog order.
    fn list_models(&self) -> &[ModelRecord];
    /// Whether a model is currently shown.
    fn is_enabled(&self, id: &str) -> bool;
    /// Flip one model.
    fn toggle(&mut self, id: &str) -> ToggleOutcome;
    /// Show every model.
    fn select_all(&mut self);
    /// Hide every model.
    fn deselect_all(&mut self);
    /// Change which series are drawn.
    fn set_display_mode(&mut self, mode: DisplayMode);
    /// Current display mode.
    fn display_mode(&self) -> DisplayMode;
}

/// Chart state: catalog, selection, display mode and their projections.
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Catalog,
    selection: SelectionState,
    display_mode: DisplayMode,
    rows: Vec<ModelRecord>,
    axis_bound: f64,
    revision: u64,
}

impl Dashboard {
    /// Create a dashboard over `catalog` with the default selection.
    pub fn new(catalog: Catalog) -> Self {
        let selection = SelectionState::new(&catalog);
        let mut dashboard = Self {
            catalog,
            selection,
            display_mode: DisplayMode::default(),
            rows: Vec::new(),
            axis_bound: 0.0,
            revision: 0,
        };
        dashboard.recompute();
        dashboard
    }

    /// Set the initial display mode.
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Visible rows in catalog order.
    pub fn rows(&self) -> &[ModelRecord] {
        &self.rows
    }

    /// Upper bound for the value axis.
    pub fn axis_bound(&self) -> f64 {
        self.axis_bound
    }

    /// Incremented every time the rows, bound or display mode change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of enabled models.
    pub fn enabled_count(&self) -> usize {
        self.selection.len()
    }

    /// State of the master "All Models" checkbox.
    pub fn all_checked(&self) -> bool {
        self.selection.is_all(&self.catalog)
    }

    /// State of the "Deselect All" checkbox.
    pub fn none_checked(&self) -> bool {
        self.selection.is_empty()
    }

    /// Activate the master checkbox: when checked it falls back to the
    /// default selection, otherwise it selects everything.
    pub fn toggle_all_checkbox(&mut self) {
        let checked = self.all_checked();
        self.selection.set_all(&self.catalog, !checked);
        self.recompute();
    }

    /// Restore the startup selection.
    pub fn select_default(&mut self) {
        self.selection.select_default(&self.catalog);
        self.recompute();
    }

    /// Advance to the next display mode.
    pub fn cycle_display_mode(&mut self) -> DisplayMode {
        let next = self.display_mode.next();
        self.set_display_mode(next);
        next
    }

    /// Tooltip for the visible row at `index`, if any.
    pub fn tooltip_for_row(&self, index: usize) -> Option<Tooltip> {
        let record = self.rows.get(index)?;
        let payload = payload_for(record, self.display_mode);
        format_tooltip(true, &record.display_name, &payload)
    }

    /// Re-derive rows and axis bound from the selection.
    fn recompute(&mut self) {
        let rows = derive_chart_data(&self.catalog, &self.selection);
        self.axis_bound = axis_bound(&rows);
        self.rows = rows.into_iter().cloned().collect();
        self.revision += 1;
        tracing::debug!(
            rows = self.rows.len(),
            axis_bound = self.axis_bound,
            revision = self.revision,
            "chart data recomputed"
        );
    }
}

impl SettingsControls for Dashboard {
    fn list_models(&self) -> &[ModelRecord] {
        self.catalog.models()
    }

    fn is_enabled(&self, id: &str) -> bool {
        self.selection.is_enabled(id)
    }

    fn toggle(&mut self, id: &str) -> ToggleOutcome {
        let outcome = self.selection.toggle(&self.catalog, id);
        if outcome.changed() {
            self.recompute();
        }
        outcome
    }

    fn select_all(&mut self) {
        self.selection.select_all(&self.catalog);
        self.recompute();
    }

    fn deselect_all(&mut self) {
        self.selection.deselect_all();
        self.recompute();
    }

    fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.display_mode != mode {
            self.display_mode = mode;
            self.revision += 1;
            tracing::debug!(mode = %mode, "display mode changed");
        }
    }

    fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }
}
