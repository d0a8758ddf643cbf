//! The subject × assessment grade grid.

use super::grade::{CellValue, Grade};
use super::subject::{AssessmentSlot, Subject};

/// One subject's five cells, in [`AssessmentSlot::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubjectRow {
    cells: [CellValue; 5],
}

impl SubjectRow {
    /// Row built from explicit cells in column order.
    pub const fn from_cells(cells: [CellValue; 5]) -> Self {
        Self { cells }
    }

    pub fn get(&self, slot: AssessmentSlot) -> CellValue {
        self.cells[slot.index()]
    }

    pub fn set(&mut self, slot: AssessmentSlot, value: CellValue) {
        self.cells[slot.index()] = value;
    }

    /// Grades entered in the exam slots, skipping unset ones.
    pub fn exam_grades(&self) -> impl Iterator<Item = Grade> + '_ {
        AssessmentSlot::EXAMS
            .into_iter()
            .filter_map(move |slot| self.get(slot).grade())
    }

    pub fn oral(&self) -> CellValue {
        self.get(AssessmentSlot::Oral)
    }

    pub fn presentation(&self) -> CellValue {
        self.get(AssessmentSlot::Presentation)
    }

    pub fn cells(&self) -> &[CellValue; 5] {
        &self.cells
    }
}

/// Grade grid with exactly one cell per (subject, slot) pair.
///
/// Created with every cell unset and mutated only through [`GradeTable::set`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GradeTable {
    rows: [SubjectRow; 5],
}

impl GradeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, subject: Subject, slot: AssessmentSlot) -> CellValue {
        self.rows[subject.index()].get(slot)
    }

    pub fn set(&mut self, subject: Subject, slot: AssessmentSlot, value: CellValue) {
        self.rows[subject.index()].set(slot, value);
    }

    pub fn row(&self, subject: Subject) -> &SubjectRow {
        &self.rows[subject.index()]
    }

    /// Rows paired with their subject, in display order.
    pub fn rows(&self) -> impl Iterator<Item = (Subject, &SubjectRow)> {
        Subject::ALL.into_iter().map(move |s| (s, self.row(s)))
    }

    /// Number of cells holding a grade.
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells().iter())
            .filter(|cell| cell.is_set())
            .count()
    }
}
