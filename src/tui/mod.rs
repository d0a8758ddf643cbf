//! Terminal User Interface for entering grades and viewing results.
//!
//! Two screens share one [`Session`]: the input grid and the result table.
//! The loop is strictly synchronous. It reads one key event, applies it to
//! the session, then redraws the current screen from the session state.
//! Nothing renders between events.
//!
//! # Usage
//!
//! ```rust,no_run
//! use gradecalc::config::GradecalcConfig;
//! use gradecalc::tui::GradeExplorer;
//!
//! let config = GradecalcConfig::default();
//! let mut explorer = GradeExplorer::new(&config)?;
//! explorer.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod input_actions;
pub mod input_view;
pub mod layout;
pub mod navigation;
pub mod result_actions;
pub mod result_view;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::GradecalcConfig;
use crate::observability::set_tui_active;
use crate::session::Session;
use app::GradeApp;

/// Owns the terminal for the lifetime of one grading session
pub struct GradeExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: GradeApp,
}

impl GradeExplorer {
    /// Take over the terminal and start a fresh session
    pub fn new(config: &GradecalcConfig) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // A half-built explorer has no Drop; release the terminal on failure
        let terminal = restore_on_error(enter_terminal(), release_terminal)?;
        set_tui_active(true);

        let session = Session::new(config.weights);
        let app = GradeApp::new(session, config.display.clone());
        tracing::info!("session started");

        Ok(Self { terminal, app })
    }

    /// Run the interactive event loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    if self.app.handle_key(key)? {
                        break;
                    }
                }
                // Resize and other events only need the redraw at the top of the loop
                _ => {}
            }
        }

        tracing::info!(
            filled = self.app.session().table().filled_count(),
            "session ended"
        );
        self.cleanup()
    }

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for GradeExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Best-effort restore for a terminal that never reached a `GradeExplorer`.
fn release_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
}

/// Run `restore` if `result` failed, then hand the result back unchanged.
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    result.inspect_err(|_| restore())
}
