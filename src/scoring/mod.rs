//! Grade aggregation: per-subject composites and the overall average.

pub mod composite;
pub mod overall;
pub mod report;

pub use composite::{compute_subject_grade, round_two_decimals, WeightedTerm};
pub use overall::overall_average;
pub use report::{format_grade, GradeReport, SubjectGrade};
