//! Selected cell on the input screen.

use crate::core::{AssessmentSlot, Subject};

/// Row/column position in the grade grid, always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    const ROWS: usize = Subject::ALL.len();
    const COLS: usize = AssessmentSlot::ALL.len();

    pub fn subject(&self) -> Subject {
        Subject::ALL[self.row]
    }

    pub fn slot(&self) -> AssessmentSlot {
        AssessmentSlot::ALL[self.col]
    }

    /// Move by the given deltas, clamping at the grid edges.
    pub fn move_by(&mut self, d_row: isize, d_col: isize) {
        self.row = clamp_step(self.row, d_row, Self::ROWS);
        self.col = clamp_step(self.col, d_col, Self::COLS);
    }
}

fn clamp_step(current: usize, delta: isize, len: usize) -> usize {
    current
        .saturating_add_signed(delta)
        .min(len.saturating_sub(1))
}
