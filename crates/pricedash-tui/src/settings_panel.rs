//! Settings panel: which models and which price series are visible.
//!
//! The panel only reads through [`SettingsControls`]; activating an item is
//! the app's job (see [`SettingsItem`]).

use pricedash_catalog::{DisplayMode, SettingsControls};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

/// A selectable row in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    /// Master checkbox, checked when every model is visible
    AllModels,
    /// Checked when no model is visible
    DeselectAll,
    /// Display mode radio option
    Mode(DisplayMode),
    /// Model checkbox, by catalog index
    Model(usize),
}

/// Selectable items in display order.
pub fn settings_items(model_count: usize) -> Vec<SettingsItem> {
    let mut items = vec![SettingsItem::AllModels, SettingsItem::DeselectAll];
    items.extend(DisplayMode::ALL.iter().copied().map(SettingsItem::Mode));
    items.extend((0..model_count).map(SettingsItem::Model));
    items
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn radio(selected: bool) -> &'static str {
    if selected { "(•)" } else { "( )" }
}

/// Settings panel widget.
pub struct SettingsPanel<'a, S: SettingsControls> {
    controls: &'a S,
    theme: &'a Theme,
    cursor: usize,
    focused: bool,
}

impl<'a, S: SettingsControls> SettingsPanel<'a, S> {
    /// Create a new settings panel.
    pub fn new(controls: &'a S, theme: &'a Theme) -> Self {
        Self {
            controls,
            theme,
            cursor: 0,
            focused: false,
        }
    }

    /// Index into [`settings_items`] under the cursor.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set focus state.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn is_checked(&self, item: SettingsItem) -> bool {
        let models = self.controls.list_models();
        match item {
            SettingsItem::AllModels => models.iter().all(|m| self.controls.is_enabled(&m.id)),
            SettingsItem::DeselectAll => !models.iter().any(|m| self.controls.is_enabled(&m.id)),
            SettingsItem::Mode(mode) => self.controls.display_mode() == mode,
            SettingsItem::Model(idx) => models
                .get(idx)
                .is_some_and(|m| self.controls.is_enabled(&m.id)),
        }
    }

    fn item_line(&self, item: SettingsItem, under_cursor: bool) -> Line<'a> {
        let colors = &self.theme.colors;
        let checked = self.is_checked(item);

        let (mark, label, detail) = match item {
            SettingsItem::AllModels => (checkbox(checked), "All Models".to_string(), None),
            SettingsItem::DeselectAll => (checkbox(checked), "Deselect All".to_string(), None),
            SettingsItem::Mode(mode) => (radio(checked), mode.label().to_string(), None),
            SettingsItem::Model(idx) => {
                let model = &self.controls.list_models()[idx];
                (
                    checkbox(checked),
                    model.display_name.clone(),
                    Some(model.provider.name()),
                )
            }
        };

        let mut label_style = Style::default().fg(colors.text);
        if under_cursor && self.focused {
            label_style = label_style.fg(colors.cursor).add_modifier(Modifier::REVERSED);
        }
        let mark_style = if checked {
            Style::default().fg(colors.checked).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text_dim)
        };

        let mut spans = vec![
            Span::styled(mark, mark_style),
            Span::raw(" "),
            Span::styled(label, label_style),
        ];
        if let Some(provider) = detail {
            spans.push(Span::styled(
                format!("  {provider}"),
                Style::default().fg(colors.text_dim),
            ));
        }
        Line::from(spans)
    }

    fn section_line(&self, title: &'static str) -> Line<'a> {
        Line::from(Span::styled(
            format!("── {title} ──"),
            Style::default().fg(self.theme.colors.text_dim),
        ))
    }
}

impl<S: SettingsControls> Widget for SettingsPanel<'_, S> {
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
                " Visible Models ",
                Style::default().fg(colors.header).add_modifier(Modifier::BOLD),
            ));

        let items = settings_items(self.controls.list_models().len());
        let mut lines = Vec::with_capacity(items.len() + 2);
        let mut cursor_line = 0;

        for (idx, item) in items.iter().enumerate() {
            match item {
                SettingsItem::Mode(DisplayMode::Both) => lines.push(self.section_line("Display")),
                SettingsItem::Model(0) => lines.push(self.section_line("Models")),
                _ => {}
            }
            if idx == self.cursor {
                cursor_line = lines.len();
            }
            lines.push(self.item_line(*item, idx == self.cursor));
        }

        // Keep the cursor row inside the viewport
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = if visible > 0 && cursor_line >= visible {
            cursor_line + 1 - visible
        } else {
            0
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}
