//! Main application state and logic for the pricedash TUI.
//!
//! The `App` struct owns the [`Dashboard`], routes key events to it, and
//! draws the header, chart, tooltip, settings panel and help overlay.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use pricedash_catalog::{Catalog, Dashboard, SettingsControls, ToggleOutcome};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::chart_panel::{ChartPanel, TooltipPanel};
use crate::config::DashboardConfig;
use crate::event::{AppEvent, InputHandler};
use crate::settings_panel::{SettingsItem, SettingsPanel, settings_items};
use crate::theme::ThemeManager;
use crate::view::{FocusPanel, LayoutMode};

/// Result type for app operations.
pub type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Header timestamp cache duration (update every second).
const TIMESTAMP_CACHE_DURATION: Duration = Duration::from_secs(1);

fn local_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Main application state.
pub struct App {
    /// Catalog, selection and derived chart data
    dashboard: Dashboard,
    /// Color theme
    theme_manager: ThemeManager,
    /// Key mapping
    input_handler: InputHandler,
    /// Panel receiving cursor keys
    focus_panel: FocusPanel,
    /// Whether the settings panel is open
    show_settings: bool,
    /// Whether the help overlay is visible
    show_help: bool,
    /// Whether the app should quit
    should_quit: bool,
    /// Hovered chart row
    chart_cursor: usize,
    /// Index into the settings items
    settings_cursor: usize,
    /// Status line message
    status_message: Option<String>,
    /// Redraw needed for app-local state (cursor, focus, overlays)
    dirty: bool,
    /// Dashboard revision on screen
    drawn_revision: u64,
    /// Event poll interval
    tick_rate: Duration,
    cached_timestamp: Option<String>,
    last_timestamp_update: Instant,
}

impl App {
    /// Create a new app over `catalog`, starting from `config`.
    pub fn new(catalog: Catalog, config: &DashboardConfig) -> Self {
        let dashboard = Dashboard::new(catalog).with_display_mode(config.display_mode);
        let focus_panel = if config.show_settings {
            FocusPanel::Settings
        } else {
            FocusPanel::Chart
        };

        Self {
            dashboard,
            theme_manager: ThemeManager::with_name(config.theme),
            input_handler: InputHandler::new(),
            focus_panel,
            show_settings: config.show_settings,
            show_help: false,
            should_quit: false,
            chart_cursor: 0,
            settings_cursor: 0,
            status_message: None,
            dirty: true,
            drawn_revision: 0,
            tick_rate: config.tick_rate(),
            cached_timestamp: Some(local_timestamp()),
            last_timestamp_update: Instant::now(),
        }
    }

    /// Dashboard state.
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Get the current focus panel.
    pub fn focus_panel(&self) -> FocusPanel {
        self.focus_panel
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Check if help overlay is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Check if the settings panel is open.
    pub fn show_settings(&self) -> bool {
        self.show_settings
    }

    /// Hovered chart row.
    pub fn chart_cursor(&self) -> usize {
        self.chart_cursor
    }

    /// Settings item under the cursor.
    pub fn settings_cursor(&self) -> usize {
        self.settings_cursor
    }

    /// Current status line message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Mark the UI as dirty (needs redraw).
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if UI needs redraw and clear the dirty flag.
    ///
    /// Selection and display-mode changes are picked up from the dashboard
    /// revision, so no-op activations do not repaint.
    fn take_dirty(&mut self) -> bool {
        let revision = self.dashboard.revision();
        if self.dirty || revision != self.drawn_revision {
            self.dirty = false;
            self.drawn_revision = revision;
            true
        } else {
            false
        }
    }

    /// Get cached timestamp or update if expired.
    fn get_cached_timestamp(&mut self) -> String {
        if self.last_timestamp_update.elapsed() >= TIMESTAMP_CACHE_DURATION {
            self.cached_timestamp = Some(local_timestamp());
            self.last_timestamp_update = Instant::now();
        }
        self.cached_timestamp.clone().unwrap_or_default()
    }

    fn settings_len(&self) -> usize {
        settings_items(self.dashboard.list_models().len()).len()
    }

    /// Keep the chart cursor on an existing row after the rows change.
    fn clamp_chart_cursor(&mut self) {
        let len = self.dashboard.rows().len();
        self.chart_cursor = self.chart_cursor.min(len.saturating_sub(1));
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.mark_dirty();
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let event = self.input_handler.handle_key(key);
        self.handle_app_event(event);
    }

    /// Handle an application event.
    pub fn handle_app_event(&mut self, event: AppEvent) {
        if event == AppEvent::None {
            return;
        }

        // Any key closes the help overlay
        if self.show_help && event != AppEvent::ForceQuit {
            self.show_help = false;
            self.mark_dirty();
            return;
        }

        match event {
            AppEvent::ToggleSettings => {
                self.show_settings = !self.show_settings;
                self.focus_panel = if self.show_settings {
                    FocusPanel::Settings
                } else {
                    FocusPanel::Chart
                };
                self.mark_dirty();
            }
            AppEvent::FocusNext => {
                if self.show_settings {
                    self.focus_panel = self.focus_panel.toggled();
                    self.mark_dirty();
                }
            }
            AppEvent::SelectAll => {
                self.dashboard.select_all();
                self.set_status("All models selected");
            }
            AppEvent::SelectDefault => {
                self.dashboard.select_default();
                self.set_status("Default models selected");
            }
            AppEvent::DeselectAll => {
                self.dashboard.deselect_all();
                self.set_status("All models deselected");
            }
            AppEvent::CycleDisplayMode => {
                let mode = self.dashboard.cycle_display_mode();
                self.set_status(format!("Showing: {mode}"));
            }
            AppEvent::CycleTheme => {
                let name = self.theme_manager.cycle_theme();
                tracing::debug!(theme = name.display_name(), "theme changed");
                self.set_status(format!("Theme: {}", name.display_name()));
            }
            AppEvent::ShowHelp => {
                self.show_help = true;
                self.mark_dirty();
            }
            AppEvent::Quit | AppEvent::ForceQuit => self.should_quit = true,
            AppEvent::Cancel => {
                if self.show_settings {
                    self.show_settings = false;
                    self.focus_panel = FocusPanel::Chart;
                    self.mark_dirty();
                } else {
                    self.should_quit = true;
                }
            }
            AppEvent::NavigateUp => self.move_cursor(-1),
            AppEvent::NavigateDown => self.move_cursor(1),
            AppEvent::GoToTop => self.move_cursor(isize::MIN),
            AppEvent::GoToBottom => self.move_cursor(isize::MAX),
            AppEvent::Activate => {
                if self.focus_panel == FocusPanel::Settings {
                    self.activate_setting();
                }
            }
            AppEvent::None => {}
        }

        self.clamp_chart_cursor();
    }

    /// Move the cursor of the focused panel by `delta`, saturating at the ends.
    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.focus_panel {
            FocusPanel::Chart => (&mut self.chart_cursor, self.dashboard.rows().len()),
            FocusPanel::Settings => {
                let len = self.settings_len();
                (&mut self.settings_cursor, len)
            }
        };
        let max = len.saturating_sub(1);
        let moved = cursor.saturating_add_signed(delta).min(max);
        if moved != *cursor {
            *cursor = moved;
            self.dirty = true;
        }
    }

    /// Activate the settings item under the cursor.
    fn activate_setting(&mut self) {
        let items = settings_items(self.dashboard.list_models().len());
        let Some(item) = items.get(self.settings_cursor).copied() else {
            return;
        };

        match item {
            SettingsItem::AllModels => self.dashboard.toggle_all_checkbox(),
            SettingsItem::DeselectAll => self.dashboard.deselect_all(),
            SettingsItem::Mode(mode) => self.dashboard.set_display_mode(mode),
            SettingsItem::Model(idx) => {
                let Some(id) = self.dashboard.list_models().get(idx).map(|m| m.id.clone()) else {
                    return;
                };
                match self.dashboard.toggle(&id) {
                    ToggleOutcome::RejectedLastSelected => {
                        self.set_status("At least one model stays visible; use x to clear all");
                    }
                    ToggleOutcome::UnknownId => {
                        tracing::warn!(id = %id, "toggle for unknown model id");
                    }
                    ToggleOutcome::Enabled | ToggleOutcome::Disabled => {
                        self.status_message = None;
                    }
                }
            }
        }
    }

    /// Run the main application loop.
    pub fn run(&mut self) -> AppResult<()> {
        // Setup terminal
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        tracing::info!(models = self.dashboard.list_models().len(), "dashboard started");

        // Main loop
        let result = self.run_loop(&mut terminal);

        // Restore terminal
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        tracing::info!("dashboard stopped");
        result
    }

    /// The inner event loop: redraw when dirty or when the clock ticks over.
    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> AppResult<()> {
        while !self.should_quit {
            let needs_redraw =
                self.take_dirty() || self.last_timestamp_update.elapsed() >= TIMESTAMP_CACHE_DURATION;

            if needs_redraw {
                terminal.draw(|frame| self.draw(frame))?;
            }

            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Resize(_, _) => self.mark_dirty(),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: header, content, footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(8),    // Content
                Constraint::Length(2), // Footer
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_content(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        if self.show_help {
            self.draw_help_overlay(frame, area);
        }
    }

    /// Draw the header with title, description and cached timestamp.
    fn draw_header(&mut self, frame: &mut Frame, area: Rect) {
        let now = self.get_cached_timestamp();
        let theme = self.theme_manager.current();
        let title = " AI Model Pricing Dashboard ";

        let summary = format!(
            "[{}/{} models · {}]",
            self.dashboard.enabled_count(),
            self.dashboard.list_models().len(),
            self.dashboard.display_mode()
        );
        let right_len = now.chars().count() + 2 + summary.chars().count();
        let spacing = area
            .width
            .saturating_sub(title.len() as u16 + right_len as u16 + 2) as usize;

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(title, Style::default().fg(theme.colors.header).add_modifier(Modifier::BOLD)),
                Span::raw(" ".repeat(spacing)),
                Span::styled(now, Style::default().fg(theme.colors.text_dim)),
                Span::raw("  "),
                Span::styled(summary, Style::default().fg(theme.colors.text)),
            ]),
            Line::from(Span::styled(
                " Cost per million tokens for popular AI models",
                Style::default().fg(theme.colors.text_dim),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.colors.border_dim)),
        );

        frame.render_widget(header, area);
    }

    /// Draw chart and tooltip, with settings docked or overlaid.
    fn draw_content(&mut self, frame: &mut Frame, area: Rect) {
        let layout_mode = LayoutMode::from_width(area.width);
        let docked = self.show_settings && layout_mode == LayoutMode::Wide;

        let (main_area, side_area) = if docked {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(40), Constraint::Length(layout_mode.settings_width())])
                .split(area);
            (cols[0], Some(cols[1]))
        } else {
            (area, None)
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(main_area);

        let theme = self.theme_manager.current();
        let chart_focused = self.focus_panel == FocusPanel::Chart;

        frame.render_widget(
            ChartPanel::new(&self.dashboard, theme)
                .cursor(self.chart_cursor)
                .focused(chart_focused),
            rows[0],
        );

        let tooltip = self.dashboard.tooltip_for_row(self.chart_cursor);
        frame.render_widget(TooltipPanel::new(tooltip.as_ref(), theme), rows[1]);

        if !self.show_settings {
            return;
        }

        let settings_area = match side_area {
            Some(side) => side,
            None => {
                // Dropdown anchored to the top-right of the chart
                let width = 40.min(area.width);
                let height = (self.settings_len() as u16 + 4).min(area.height);
                let overlay = Rect::new(area.x + area.width - width, area.y, width, height);
                frame.render_widget(Clear, overlay);
                overlay
            }
        };

        frame.render_widget(
            SettingsPanel::new(&self.dashboard, theme)
                .cursor(self.settings_cursor)
                .focused(self.focus_panel == FocusPanel::Settings),
            settings_area,
        );
    }

    /// Draw the footer with hotkey hints and the status message.
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let theme = self.theme_manager.current();
        let hotkey_style = Style::default().fg(theme.colors.hotkey);
        let hints = vec![
            Span::styled("[s]", hotkey_style),
            Span::raw("Settings "),
            Span::styled("[a]", hotkey_style),
            Span::raw("All "),
            Span::styled("[d]", hotkey_style),
            Span::raw("Default "),
            Span::styled("[x]", hotkey_style),
            Span::raw("None "),
            Span::styled("[m]", hotkey_style),
            Span::raw("Mode "),
            Span::styled("[t]", hotkey_style),
            Span::raw("Theme "),
            Span::styled("[?]", hotkey_style),
            Span::raw("Help "),
            Span::styled("[q]", hotkey_style),
            Span::raw("Quit"),
        ];

        let mut block = Block::default().borders(Borders::TOP);
        if let Some(status) = &self.status_message {
            block = block
                .title(Span::styled(
                    format!(" {status} "),
                    Style::default().fg(theme.colors.status_warning),
                ))
                .title_alignment(ratatui::layout::Alignment::Right);
        }

        let footer = Paragraph::new(Line::from(hints))
            .style(Style::default().fg(theme.colors.text_dim))
            .block(block);

        frame.render_widget(footer, area);
    }

    /// Draw the help overlay.
    fn draw_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let theme = self.theme_manager.current();
        // Calculate centered overlay area
        let overlay_width = 56.min(area.width.saturating_sub(4));
        let overlay_height = 24.min(area.height.saturating_sub(4));
        let overlay_x = (area.width - overlay_width) / 2;
        let overlay_y = (area.height - overlay_height) / 2;

        let overlay_area = Rect::new(overlay_x, overlay_y, overlay_width, overlay_height);

        // Clear background
        frame.render_widget(Clear, overlay_area);

        let help_text = "\
Pricing Dashboard Hotkeys

Models:
  s        Open / close settings
  a        Select all models
  d        Default selection
  x        Deselect all
  m        Cycle display mode
  Space    Toggle item under cursor

Navigation:
  ↑ k      Move up
  ↓ j      Move down
  g  G     First / last
  Tab      Switch chart / settings

General:
  t        Cycle theme
  ?  h     Show this help
  q        Quit
  Esc      Close settings / quit
  Ctrl+C   Force quit

Press any key to close this help.";

        let help = Paragraph::new(help_text)
            .style(Style::default().fg(theme.colors.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.colors.header))
                    .title(Span::styled(
                        " Help ",
                        Style::default().fg(theme.colors.header).add_modifier(Modifier::BOLD),
                    ))
                    .style(Style::default().bg(Color::Black)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(help, overlay_area);
    }
}
