//! Which models are visible on the chart.
//!
//! [`SelectionState`] is plain set membership over catalog ids. Transition
//! rules:
//!
//! - a single toggle never empties the set; toggling the last selected id
//!   is rejected
//! - [`SelectionState::deselect_all`] is the only way to reach the empty set
//! - ids outside the catalog are ignored

use std::collections::HashSet;

use pricedash_core::log_selection_event;

use crate::catalog::Catalog;

/// What a call to [`SelectionState::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The id was added to the selection
    Enabled,
    /// The id was removed from the selection
    Disabled,
    /// The id is the only selected one; selection unchanged
    RejectedLastSelected,
    /// The id is not in the catalog; selection unchanged
    UnknownId,
}

impl ToggleOutcome {
    /// Whether the selection changed.
    pub fn changed(&self) -> bool {
        matches!(self, ToggleOutcome::Enabled | ToggleOutcome::Disabled)
    }
}

/// Set of enabled model ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    enabled: HashSet<String>,
}

impl SelectionState {
    /// Initial selection: every model except the last two in catalog order.
    pub fn new(catalog: &Catalog) -> Self {
        let mut state = Self::default();
        state.select_default(catalog);
        state
    }

    /// Whether a model is selected.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.contains(id)
    }

    /// Number of selected models.
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Whether every catalog model is selected.
    pub fn is_all(&self, catalog: &Catalog) -> bool {
        self.enabled.len() == catalog.len()
    }

    /// Flip membership of one model.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> ToggleOutcome {
        if !catalog.contains(id) {
            tracing::debug!(model_id = id, "ignoring toggle for unknown model");
            return ToggleOutcome::UnknownId;
        }

        let outcome = if self.enabled.contains(id) {
            if self.enabled.len() == 1 {
                ToggleOutcome::RejectedLastSelected
            } else {
                self.enabled.remove(id);
                ToggleOutcome::Disabled
            }
        } else {
            self.enabled.insert(id.to_string());
            ToggleOutcome::Enabled
        };

        log_selection_event!(
            "toggle",
            model_id = id,
            outcome = ?outcome,
            enabled = self.enabled.len()
        );
        outcome
    }

    /// Select every catalog model.
    pub fn select_all(&mut self, catalog: &Catalog) {
        self.enabled = catalog.ids().map(str::to_string).collect();
        log_selection_event!("select_all", enabled = self.enabled.len());
    }

    /// Select everything except the last two catalog entries.
    pub fn select_default(&mut self, catalog: &Catalog) {
        self.enabled = catalog.default_ids().map(str::to_string).collect();
        log_selection_event!("select_default", enabled = self.enabled.len());
    }

    /// Clear the selection. The chart renders with zero bars.
    pub fn deselect_all(&mut self) {
        self.enabled.clear();
        log_selection_event!("deselect_all");
    }

    /// Master "All Models" checkbox: checked selects everything, unchecked
    /// goes back to the default selection.
    pub fn set_all(&mut self, catalog: &Catalog, enabled: bool) {
        if enabled {
            self.select_all(catalog);
        } else {
            self.select_default(catalog);
        }
    }
}
