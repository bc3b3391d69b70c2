//! Horizontal bar chart of model prices, plus the hover tooltip.

use pricedash_catalog::{Dashboard, DisplayMode, SettingsControls, Tooltip, axis_ticks, format_dollar};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

/// Widest model label before truncation.
const MAX_LABEL_WIDTH: usize = 24;

/// Renders a horizontal bar scaled against `max`.
pub fn render_bar(value: f64, max: f64, width: usize, filled_char: char) -> String {
    let pct = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (pct * width as f64).round() as usize;
    filled_char.to_string().repeat(filled)
}

/// Truncate a label to `max_len` characters.
pub fn truncate_label(label: &str, max_len: usize) -> String {
    let count = label.chars().count();
    if count <= max_len {
        label.to_string()
    } else if max_len > 1 {
        let mut out: String = label.chars().take(max_len - 1).collect();
        out.push('…');
        out
    } else {
        label.chars().take(max_len).collect()
    }
}

/// Ruler under the bars: tick labels spread across `width` columns.
///
/// Labels are left-aligned at their tick, except the last one, which is
/// right-aligned so the bound sits at the end of the ruler.
pub fn render_ruler(bound: f64, width: usize, ticks: usize) -> String {
    let mut ruler = vec![' '; width];
    let values = axis_ticks(bound, ticks);
    let last = values.len().saturating_sub(1);

    for (i, value) in values.iter().enumerate() {
        let label: Vec<char> = format_dollar(*value).chars().collect();
        let pos = if bound > 0.0 {
            ((value / bound) * width as f64).round() as usize
        } else {
            0
        };
        let start = if i == last {
            width.saturating_sub(label.len())
        } else {
            pos.min(width.saturating_sub(label.len()))
        };
        for (offset, ch) in label.iter().enumerate() {
            if let Some(cell) = ruler.get_mut(start + offset) {
                *cell = *ch;
            }
        }
    }

    ruler.into_iter().collect::<String>().trim_end().to_string()
}

/// First row shown so that `cursor` stays inside a window of `visible` rows.
pub fn window_start(cursor: usize, visible: usize) -> usize {
    if visible == 0 || cursor < visible {
        0
    } else {
        cursor + 1 - visible
    }
}

/// Bar chart panel widget.
pub struct ChartPanel<'a> {
    dashboard: &'a Dashboard,
    theme: &'a Theme,
    cursor: usize,
    focused: bool,
}

impl<'a> ChartPanel<'a> {
    /// Create a new chart panel.
    pub fn new(dashboard: &'a Dashboard, theme: &'a Theme) -> Self {
        Self {
            dashboard,
            theme,
            cursor: 0,
            focused: false,
        }
    }

    /// Row index under the cursor.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set focus state.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn legend_line(&self, mode: DisplayMode) -> Line<'a> {
        let mut spans = Vec::new();
        for series in mode.series() {
            spans.push(Span::styled(
                "■ ",
                Style::default().fg(self.theme.series_color(*series)),
            ));
            spans.push(Span::styled(
                format!("{}   ", series.name()),
                Style::default().fg(self.theme.colors.text),
            ));
        }
        Line::from(spans)
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut lines = Vec::new();
        let pad = area.height.saturating_sub(2) / 2;
        for _ in 0..pad {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "No models selected",
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Press s to choose models, d for defaults",
            Style::default().fg(colors.text_dim),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for ChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let border_style = if self.focused {
            Style::default().fg(colors.header)
        } else {
            Style::default().fg(colors.border_dim)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                " AI Model Pricing Comparison ",
                Style::default().fg(colors.header).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.dashboard.rows();
        if rows.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        let mode = self.dashboard.display_mode();
        let series = mode.series();
        let bound = self.dashboard.axis_bound();

        let label_width = rows
            .iter()
            .map(|r| r.display_name.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);
        // "▶ " marker, label, " │"
        let gutter = label_width + 4;
        let bar_width = (inner.width as usize).saturating_sub(gutter + 1);

        // Legend and ruler take two lines
        let body_height = (inner.height as usize).saturating_sub(2);
        let visible = (body_height / series.len().max(1)).max(1);
        let start = window_start(self.cursor, visible);

        let mut lines = vec![self.legend_line(mode)];

        for (idx, row) in rows.iter().enumerate().skip(start).take(visible) {
            let selected = idx == self.cursor;
            let label_style = if selected && self.focused {
                Style::default().fg(colors.cursor).add_modifier(Modifier::REVERSED)
            } else if selected {
                Style::default().fg(colors.cursor)
            } else {
                Style::default().fg(colors.text)
            };

            for (n, s) in series.iter().enumerate() {
                let (marker, label) = if n == 0 {
                    (
                        if selected { "▶ " } else { "  " },
                        format!(
                            "{:>width$}",
                            truncate_label(&row.display_name, label_width),
                            width = label_width
                        ),
                    )
                } else {
                    ("  ", " ".repeat(label_width))
                };

                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(colors.cursor)),
                    Span::styled(label, label_style),
                    Span::styled(" │", Style::default().fg(colors.border_dim)),
                    Span::styled(
                        render_bar(s.value(row), bound, bar_width, '█'),
                        Style::default().fg(self.theme.series_color(*s)),
                    ),
                ]));
            }
        }

        let ticks = (bar_width / 12).clamp(2, 6);
        let ruler = render_ruler(bound, bar_width, ticks);
        let body_lines = lines.len() - 1;
        for _ in body_lines..body_height.min(visible * series.len()) {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(gutter)),
            Span::styled(ruler, Style::default().fg(colors.text_dim)),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Tooltip panel for the row under the chart cursor.
pub struct TooltipPanel<'a> {
    tooltip: Option<&'a Tooltip>,
    theme: &'a Theme,
}

impl<'a> TooltipPanel<'a> {
    /// Create a tooltip panel; `None` renders a hint.
    pub fn new(tooltip: Option<&'a Tooltip>, theme: &'a Theme) -> Self {
        Self { tooltip, theme }
    }
}

impl Widget for TooltipPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border_dim))
            .title(Span::styled(" Details ", Style::default().fg(colors.header)));

        let Some(tooltip) = self.tooltip else {
            Paragraph::new(Line::from(Span::styled(
                "Move the cursor onto a model to see prices",
                Style::default().fg(colors.text_dim),
            )))
            .block(block)
            .render(area, buf);
            return;
        };

        let mut spans = vec![Span::styled(
            format!("{}  ", tooltip.label),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )];
        for line in &tooltip.lines {
            let swatch = line.fill.parse::<Color>().unwrap_or(colors.text);
            spans.push(Span::styled("● ", Style::default().fg(swatch)));
            spans.push(Span::styled(
                format!("{}: {}  ", line.name, line.value),
                Style::default().fg(colors.text),
            ));
        }
        spans.push(Span::styled(
            format!("Total: {}", tooltip.total),
            Style::default().fg(colors.hotkey).add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
