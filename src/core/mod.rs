//! Core grade data model.

pub mod errors;
pub mod grade;
pub mod subject;
pub mod table;

pub use errors::{Error, Result};
pub use grade::{CellValue, Grade};
pub use subject::{AssessmentSlot, SlotKind, Subject};
pub use table::{GradeTable, SubjectRow};
