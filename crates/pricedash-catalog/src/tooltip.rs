//! Hover tooltip formatting.

use crate::models::{DisplayMode, ModelRecord};

/// One series value under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    /// Series name (e.g., "Input Cost")
    pub name: String,
    /// Price in USD per million tokens
    pub value: f64,
    /// Series fill color as hex
    pub fill: String,
}

impl TooltipEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, value: f64, fill: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            fill: fill.into(),
        }
    }
}

/// A formatted tooltip line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    pub name: String,
    pub value: String,
    pub fill: String,
}

/// Tooltip ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Hovered category label (model display name)
    pub label: String,
    /// One line per payload entry, payload order
    pub lines: Vec<TooltipLine>,
    /// Sum of all entry values
    pub total: String,
}

/// Format a price as `$` followed by two decimals.
///
/// Uses `{:.2}`: an exact binary tie such as `0.125` rounds half to even.
pub fn format_dollar(value: f64) -> String {
    format!("${value:.2}")
}

/// Payload for one chart row: one entry per series visible under `mode`.
pub fn payload_for(record: &ModelRecord, mode: DisplayMode) -> Vec<TooltipEntry> {
    mode.series()
        .iter()
        .map(|series| TooltipEntry::new(series.name(), series.value(record), series.fill()))
        .collect()
}

/// Format a hover payload. Returns `None` when nothing is hovered or the
/// payload is empty.
pub fn format_tooltip(active: bool, label: &str, payload: &[TooltipEntry]) -> Option<Tooltip> {
    if !active || payload.is_empty() {
        return None;
    }

    let lines = payload
        .iter()
        .map(|entry| TooltipLine {
            name: entry.name.clone(),
            value: format_dollar(entry.value),
            fill: entry.fill.clone(),
        })
        .collect();

    let total: f64 = payload.iter().map(|entry| entry.value).sum();

    Some(Tooltip {
        label: label.to_string(),
        lines,
        total: format_dollar(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;

    #[test]
    fn test_format_dollar() {
        assert_eq!(format_dollar(0.1), "$0.10");
        assert_eq!(format_dollar(2.19), "$2.19");
        assert_eq!(format_dollar(15.0), "$15.00");
        assert_eq!(format_dollar(600.0), "$600.00");
        assert_eq!(format_dollar(0.0), "$0.00");
    }

    #[test]
    fn test_format_dollar_exact_ties_round_to_even() {
        // 0.125 and 0.375 are exact in binary, so the tie goes to the even digit
        assert_eq!(format_dollar(0.125), "$0.12");
        assert_eq!(format_dollar(0.375), "$0.38");
        // 0.075 is stored slightly below the midpoint
        assert_eq!(format_dollar(0.075), "$0.07");
    }

    #[test]
    fn test_tooltip_total() {
        let payload = vec![
            TooltipEntry::new("Input Cost", 0.10, "#5865F2"),
            TooltipEntry::new("Output Cost", 0.40, "#00A8FC"),
        ];
        let tooltip = format_tooltip(true, "Gemini 2.0 Flash", &payload).unwrap();
        assert_eq!(tooltip.label, "Gemini 2.0 Flash");
        assert_eq!(tooltip.lines[0].value, "$0.10");
        assert_eq!(tooltip.lines[1].value, "$0.40");
        assert_eq!(tooltip.lines[1].fill, "#00A8FC");
        assert_eq!(tooltip.total, "$0.50");
    }

    #[test]
    fn test_inactive_or_empty_renders_nothing() {
        let payload = vec![TooltipEntry::new("Input Cost", 1.0, "#5865F2")];
        assert!(format_tooltip(false, "x", &payload).is_none());
        assert!(format_tooltip(true, "x", &[]).is_none());
    }

    #[test]
    fn test_payload_follows_display_mode() {
        let record = ModelRecord::new("grok-3", "Grok 3", Provider::XAi, 3.0, 15.0);

        let both = payload_for(&record, DisplayMode::Both);
        assert_eq!(both.len(), 2);
        assert_eq!(both[0].name, "Input Cost");
        assert_eq!(both[1].value, 15.0);

        let output = payload_for(&record, DisplayMode::Output);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].name, "Output Cost");

        let tooltip = format_tooltip(true, &record.display_name, &both).unwrap();
        assert_eq!(tooltip.total, "$18.00");
    }
}
