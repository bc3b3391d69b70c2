//! Data models for model pricing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Company that serves a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    OpenAI,
    Google,
    Anthropic,
    #[serde(rename = "Mistral AI")]
    MistralAI,
    DeepSeek,
    #[serde(rename = "xAI")]
    XAi,
}

impl Provider {
    /// Display name as shown in the settings panel.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OpenAI",
            Provider::Google => "Google",
            Provider::Anthropic => "Anthropic",
            Provider::MistralAI => "Mistral AI",
            Provider::DeepSeek => "DeepSeek",
            Provider::XAi => "xAI",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One catalog entry: a model and its price per million tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Stable identifier (e.g., "claude-sonnet")
    pub id: String,

    /// Human-readable name (e.g., "Claude 3.5 Sonnet")
    pub display_name: String,

    /// Serving provider
    pub provider: Provider,

    /// USD per million input tokens
    pub input_price: f64,

    /// USD per million output tokens
    pub output_price: f64,
}

impl ModelRecord {
    /// Create a new record.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        provider: Provider,
        input_price: f64,
        output_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            provider,
            input_price,
            output_price,
        }
    }

    /// The larger of the two prices.
    pub fn max_price(&self) -> f64 {
        self.input_price.max(self.output_price)
    }
}

/// A price series that can be drawn on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Input,
    Output,
}

impl Series {
    /// Legend and tooltip name.
    pub fn name(&self) -> &'static str {
        match self {
            Series::Input => "Input Cost",
            Series::Output => "Output Cost",
        }
    }

    /// Fill color as a hex string.
    pub fn fill(&self) -> &'static str {
        match self {
            Series::Input => "#5865F2",
            Series::Output => "#00A8FC",
        }
    }

    /// The price this series reads from a record.
    pub fn value(&self, record: &ModelRecord) -> f64 {
        match self {
            Series::Input => record.input_price,
            Series::Output => record.output_price,
        }
    }
}

/// Which price series are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Both,
    Input,
    Output,
}

impl DisplayMode {
    /// All modes in cycle order.
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Both, DisplayMode::Input, DisplayMode::Output];

    /// Series drawn under this mode, input first.
    pub fn series(&self) -> &'static [Series] {
        match self {
            DisplayMode::Both => &[Series::Input, Series::Output],
            DisplayMode::Input => &[Series::Input],
            DisplayMode::Output => &[Series::Output],
        }
    }

    /// Next mode in the cycle.
    pub fn next(&self) -> DisplayMode {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Label for the settings panel.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Both => "Both",
            DisplayMode::Input => "Input only",
            DisplayMode::Output => "Output only",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_serde_names() {
        let p: Provider = serde_json::from_str("\"Mistral AI\"").unwrap();
        assert_eq!(p, Provider::MistralAI);
        let p: Provider = serde_json::from_str("\"xAI\"").unwrap();
        assert_eq!(p, Provider::XAi);
        assert_eq!(serde_json::to_string(&Provider::XAi).unwrap(), "\"xAI\"");
        assert_eq!(Provider::MistralAI.to_string(), "Mistral AI");
    }

    #[test]
    fn test_max_price() {
        let record = ModelRecord::new("m", "M", Provider::Google, 1.25, 10.0);
        assert_eq!(record.max_price(), 10.0);
        let inverted = ModelRecord::new("m", "M", Provider::Google, 3.0, 2.0);
        assert_eq!(inverted.max_price(), 3.0);
    }

    #[test]
    fn test_display_mode_series() {
        assert_eq!(DisplayMode::Both.series(), &[Series::Input, Series::Output]);
        assert_eq!(DisplayMode::Input.series(), &[Series::Input]);
        assert_eq!(DisplayMode::Output.series(), &[Series::Output]);
    }

    #[test]
    fn test_display_mode_cycle() {
        assert_eq!(DisplayMode::default(), DisplayMode::Both);
        assert_eq!(DisplayMode::Both.next(), DisplayMode::Input);
        assert_eq!(DisplayMode::Input.next(), DisplayMode::Output);
        assert_eq!(DisplayMode::Output.next(), DisplayMode::Both);
    }

    #[test]
    fn test_display_mode_serde() {
        let mode: DisplayMode = serde_json::from_str("\"output\"").unwrap();
        assert_eq!(mode, DisplayMode::Output);
    }

    #[test]
    fn test_series_values() {
        let record = ModelRecord::new("m", "M", Provider::OpenAI, 0.15, 0.6);
        assert_eq!(Series::Input.value(&record), 0.15);
        assert_eq!(Series::Output.value(&record), 0.6);
        assert_eq!(Series::Input.name(), "Input Cost");
        assert_eq!(Series::Output.fill(), "#00A8FC");
    }
}
