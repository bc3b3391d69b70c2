//! Event handling for the pricedash TUI.
//!
//! Converts key presses into [`AppEvent`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application-level events that can trigger state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Open or close the settings panel
    ToggleSettings,
    /// Move focus between chart and settings
    FocusNext,
    /// Select every model
    SelectAll,
    /// Restore the default selection
    SelectDefault,
    /// Clear the selection
    DeselectAll,
    /// Cycle both/input/output
    CycleDisplayMode,
    /// Cycle color theme
    CycleTheme,
    /// Show help overlay
    ShowHelp,
    /// Request application quit
    Quit,
    /// Force quit (Ctrl+C)
    ForceQuit,
    /// Close overlay or quit when nothing is open
    Cancel,
    /// Move the cursor up
    NavigateUp,
    /// Move the cursor down
    NavigateDown,
    /// Jump to first item
    GoToTop,
    /// Jump to last item
    GoToBottom,
    /// Activate the item under the cursor
    Activate,
    /// No action needed
    None,
}

/// Input handler for converting key events to app events.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Create a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event and return the corresponding app event.
    pub fn handle_key(&self, key: KeyEvent) -> AppEvent {
        // Windows reports both press and release
        if key.kind == KeyEventKind::Release {
            return AppEvent::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppEvent::ForceQuit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => AppEvent::Quit,
            KeyCode::Esc => AppEvent::Cancel,

            KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => AppEvent::ShowHelp,

            KeyCode::Char('s') | KeyCode::Char('S') => AppEvent::ToggleSettings,
            KeyCode::Tab | KeyCode::BackTab => AppEvent::FocusNext,

            KeyCode::Char('a') | KeyCode::Char('A') => AppEvent::SelectAll,
            KeyCode::Char('d') | KeyCode::Char('D') => AppEvent::SelectDefault,
            KeyCode::Char('x') | KeyCode::Char('X') => AppEvent::DeselectAll,
            KeyCode::Char('m') | KeyCode::Char('M') => AppEvent::CycleDisplayMode,
            KeyCode::Char('t') | KeyCode::Char('T') => AppEvent::CycleTheme,

            KeyCode::Up | KeyCode::Char('k') => AppEvent::NavigateUp,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::NavigateDown,
            KeyCode::Home | KeyCode::Char('g') => AppEvent::GoToTop,
            KeyCode::End | KeyCode::Char('G') => AppEvent::GoToBottom,

            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Activate,

            _ => AppEvent::None,
        }
    }
}
