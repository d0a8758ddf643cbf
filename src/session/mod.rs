//! Session-scoped state: the grade table, the screen controller and the
//! input cursor.
//!
//! A [`Session`] is created when the interactive program starts and dropped
//! when it exits. Nothing is shared across sessions and nothing persists.
//! Derived grades are never stored here; [`Session::report`] recomputes them
//! from the table on every call.

pub mod cursor;
pub mod screen;

pub use cursor::Cursor;
pub use screen::{is_valid_transition, NavigationResult, Screen, ScreenController, TRANSITIONS};

use crate::config::AssessmentWeights;
use crate::core::{AssessmentSlot, CellValue, GradeTable, Subject};
use crate::scoring::GradeReport;

/// State of one interactive session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    table: GradeTable,
    screen: ScreenController,
    cursor: Cursor,
    weights: AssessmentWeights,
}

impl Session {
    /// Cells in the grade table.
    pub const CELL_COUNT: usize = Subject::ALL.len() * AssessmentSlot::ALL.len();

    pub fn new(weights: AssessmentWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn table(&self) -> &GradeTable {
        &self.table
    }

    pub fn screen(&self) -> Screen {
        self.screen.current()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Value of the cell under the cursor.
    pub fn selected_cell(&self) -> CellValue {
        self.table.get(self.cursor.subject(), self.cursor.slot())
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        self.cursor.move_by(d_row, d_col);
    }

    /// Set a cell. Edits are only accepted on the input screen.
    pub fn set_cell(&mut self, subject: Subject, slot: AssessmentSlot, value: CellValue) -> bool {
        if self.screen() != Screen::Input {
            tracing::debug!(%subject, %slot, "edit ignored outside input screen");
            return false;
        }
        self.table.set(subject, slot, value);
        tracing::debug!(%subject, %slot, %value, "cell updated");
        true
    }

    /// Set the cell under the cursor.
    pub fn set_selected(&mut self, value: CellValue) -> bool {
        self.set_cell(self.cursor.subject(), self.cursor.slot(), value)
    }

    /// Advance the selector of the cell under the cursor.
    pub fn cycle_selected(&mut self) -> bool {
        let next = self.selected_cell().cycle_next();
        self.set_selected(next)
    }

    pub fn show_results(&mut self) -> NavigationResult {
        self.screen.show_results()
    }

    pub fn return_to_input(&mut self) -> NavigationResult {
        self.screen.return_to_input()
    }

    /// Per-subject grades and overall average for the current table.
    pub fn report(&self) -> GradeReport {
        GradeReport::compute(&self.table, &self.weights)
    }
}
