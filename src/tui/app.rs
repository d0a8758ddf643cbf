//! Application state for the grade TUI.

use super::{input_view, navigation, result_view, theme::Theme};
use crate::config::DisplayConfig;
use crate::session::{Screen, Session};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Main application state
pub struct GradeApp {
    session: Session,
    display: DisplayConfig,
    theme: Theme,
    /// One-shot message shown in the footer until the next key press
    status_message: Option<String>,
}

impl GradeApp {
    pub fn new(session: Session, display: DisplayConfig) -> Self {
        Self {
            session,
            display,
            theme: Theme::default(),
            status_message: None,
        }
    }

    /// Handle keyboard input; returns true when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        navigation::handle_key(self, key)
    }

    /// Render the current screen from the current session state
    pub fn render(&self, frame: &mut Frame) {
        match self.session.screen() {
            Screen::Input => input_view::render(frame, self),
            Screen::Result => result_view::render(frame, self),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}
