// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod observability;
pub mod scoring;
pub mod session;
pub mod tui;

// Re-export commonly used types
pub use crate::config::{AssessmentWeights, GradecalcConfig};
pub use crate::core::{
    AssessmentSlot, CellValue, Error, Grade, GradeTable, Result, SlotKind, Subject, SubjectRow,
};
pub use crate::scoring::{compute_subject_grade, overall_average, GradeReport, SubjectGrade};
pub use crate::session::{Screen, ScreenController, Session};
