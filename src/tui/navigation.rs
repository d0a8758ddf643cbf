//! Keyboard handling.
//!
//! Pure action determination lives in `input_actions` and `result_actions`;
//! this module is the imperative shell that applies actions to the session.

use super::app::GradeApp;
use super::input_actions::{determine_input_action, InputAction};
use super::result_actions::{determine_result_action, ResultAction};
use crate::core::CellValue;
use crate::session::{NavigationResult, Screen};
use anyhow::Result;
use crossterm::event::KeyEvent;

/// Handle keyboard input and return true if should quit
pub fn handle_key(app: &mut GradeApp, key: KeyEvent) -> Result<bool> {
    app.clear_status_message();

    match app.session().screen() {
        Screen::Input => match determine_input_action(key) {
            Some(action) => execute_input_action(app, action),
            None => Ok(false),
        },
        Screen::Result => match determine_result_action(key) {
            Some(action) => execute_result_action(app, action),
            None => Ok(false),
        },
    }
}

fn execute_input_action(app: &mut GradeApp, action: InputAction) -> Result<bool> {
    let session = app.session_mut();
    match action {
        InputAction::Quit => return Ok(true),

        InputAction::MoveUp => session.move_cursor(-1, 0),
        InputAction::MoveDown => session.move_cursor(1, 0),
        InputAction::MoveLeft => session.move_cursor(0, -1),
        InputAction::MoveRight => session.move_cursor(0, 1),

        InputAction::SetGrade(grade) => {
            session.set_selected(CellValue::Grade(grade));
        }
        InputAction::ClearCell => {
            session.set_selected(CellValue::Unset);
        }
        InputAction::CycleCell => {
            session.cycle_selected();
        }

        InputAction::ShowResults => {
            let result = session.show_results();
            report_navigation(app, result);
        }
    }

    Ok(false)
}

fn execute_result_action(app: &mut GradeApp, action: ResultAction) -> Result<bool> {
    match action {
        ResultAction::Quit => Ok(true),
        ResultAction::ReturnToInput => {
            let result = app.session_mut().return_to_input();
            report_navigation(app, result);
            Ok(false)
        }
    }
}

fn report_navigation(app: &mut GradeApp, result: NavigationResult) {
    if let NavigationResult::Invalid { from, to } = result {
        tracing::warn!(%from, %to, "rejected screen transition");
        app.set_status_message(format!("Wechsel {} → {} nicht möglich", from, to));
    }
}
