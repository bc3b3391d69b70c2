//! Focus and layout state for the pricedash TUI.

/// Panel that receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Bar chart; the cursor picks the hovered row
    #[default]
    Chart,
    /// Settings dropdown; the cursor picks a checkbox
    Settings,
}

impl FocusPanel {
    /// The other panel.
    pub fn toggled(&self) -> FocusPanel {
        match self {
            FocusPanel::Chart => FocusPanel::Settings,
            FocusPanel::Settings => FocusPanel::Chart,
        }
    }

    /// Returns the display title for this panel.
    pub fn title(&self) -> &'static str {
        match self {
            FocusPanel::Chart => "AI Model Pricing Comparison",
            FocusPanel::Settings => "Visible Models",
        }
    }
}

/// Layout mode based on terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Wide layout (110+ cols): settings docked to the right of the chart.
    Wide,
    /// Narrow layout (<110 cols): settings drawn as an overlay.
    Narrow,
}

impl LayoutMode {
    /// Width at which the settings panel docks beside the chart.
    pub const WIDE_THRESHOLD: u16 = 110;

    /// Determine the layout mode based on terminal width.
    pub fn from_width(width: u16) -> Self {
        if width >= Self::WIDE_THRESHOLD {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }

    /// Columns reserved for the docked settings panel.
    pub fn settings_width(&self) -> u16 {
        match self {
            LayoutMode::Wide => 34,
            LayoutMode::Narrow => 0,
        }
    }
}
