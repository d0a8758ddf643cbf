//! Report of all subject grades derived from a grade table.

use super::composite::compute_subject_grade;
use super::overall::overall_average;
use crate::config::AssessmentWeights;
use crate::core::{GradeTable, Subject};

/// Computed grade of one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectGrade {
    pub subject: Subject,
    pub grade: Option<f64>,
}

/// Per-subject grades plus the overall average.
///
/// Always rebuilt from the table; nothing here outlives the call that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub subjects: Vec<SubjectGrade>,
    pub overall: Option<f64>,
}

impl GradeReport {
    pub fn compute(table: &GradeTable, weights: &AssessmentWeights) -> Self {
        let subjects: Vec<SubjectGrade> = table
            .rows()
            .map(|(subject, row)| SubjectGrade {
                subject,
                grade: compute_subject_grade(row, weights),
            })
            .collect();
        let overall = overall_average(subjects.iter().map(|s| s.grade));

        Self { subjects, overall }
    }

    pub fn grade_for(&self, subject: Subject) -> Option<f64> {
        self.subjects
            .iter()
            .find(|s| s.subject == subject)
            .and_then(|s| s.grade)
    }
}

/// Format a derived grade with two decimals, or the placeholder when unset.
pub fn format_grade(grade: Option<f64>, placeholder: &str) -> String {
    grade.map_or_else(|| placeholder.to_string(), |g| format!("{:.2}", g))
}
