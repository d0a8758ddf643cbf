//! Weight-normalized composite grade for one subject.
//!
//! The composite combines up to three weighted terms:
//!
//! | term         | value                         | default weight |
//! |--------------|-------------------------------|----------------|
//! | exams        | mean of the set exam grades   | 0.4            |
//! | oral         | oral participation grade      | 0.5            |
//! | presentation | presentation grade            | 0.1            |
//!
//! A term whose inputs are all unset is left out together with its weight,
//! and the remaining weights are renormalized:
//! `Σ(term × weight) / Σ(weight)`. A subject with only an oral grade of 2
//! therefore gets 2.0, not 1.0.

use crate::config::AssessmentWeights;
use crate::core::{Grade, SlotKind, SubjectRow};

/// Scaled values this close to a `.5` boundary count as decimal ties.
///
/// Binary floats store most two-decimal ties (1.005, 1.215) just below the tie.
const TIE_TOLERANCE: f64 = 1e-6;

/// Round to two decimal places, ties away from zero.
pub fn round_two_decimals(value: f64) -> f64 {
    from_hundredths(to_hundredths(value))
}

/// Value in whole hundredths, ties away from zero.
pub fn to_hundredths(value: f64) -> i64 {
    let scaled = value * 100.0;
    (scaled + TIE_TOLERANCE.copysign(scaled)).round() as i64
}

pub fn from_hundredths(hundredths: i64) -> f64 {
    hundredths as f64 / 100.0
}

/// A single weighted contribution to a composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTerm {
    pub value: f64,
    pub weight: f64,
}

/// Arithmetic mean of the given grades, `None` when there are none.
pub fn mean_grade(grades: impl IntoIterator<Item = Grade>) -> Option<f64> {
    let (sum, count) = grades
        .into_iter()
        .fold((0.0_f64, 0_u32), |(sum, count), grade| {
            (sum + grade.as_f64(), count + 1)
        });
    (count > 0).then(|| sum / f64::from(count))
}

/// Collect the terms that take part in a row's composite.
pub fn collect_terms(row: &SubjectRow, weights: &AssessmentWeights) -> Vec<WeightedTerm> {
    let exams = mean_grade(row.exam_grades()).map(|value| WeightedTerm {
        value,
        weight: weights.for_kind(SlotKind::Exam),
    });
    let oral = row.oral().grade().map(|grade| WeightedTerm {
        value: grade.as_f64(),
        weight: weights.for_kind(SlotKind::Oral),
    });
    let presentation = row.presentation().grade().map(|grade| WeightedTerm {
        value: grade.as_f64(),
        weight: weights.for_kind(SlotKind::Presentation),
    });

    [exams, oral, presentation].into_iter().flatten().collect()
}

/// Weight-normalized average of the terms, unrounded.
///
/// Returns `None` for no terms and for a non-positive total weight.
pub fn weighted_average(terms: &[WeightedTerm]) -> Option<f64> {
    let total_weight: f64 = terms.iter().map(|t| t.weight).sum();
    if terms.is_empty() || total_weight <= 0.0 {
        return None;
    }
    let weighted_sum: f64 = terms.iter().map(|t| t.value * t.weight).sum();
    Some(weighted_sum / total_weight)
}

/// Composite grade of one subject row, rounded to two decimals.
///
/// With weights that pass [`AssessmentWeights::validate`] the result is
/// `Some` exactly when at least one cell of the row is set.
pub fn compute_subject_grade(row: &SubjectRow, weights: &AssessmentWeights) -> Option<f64> {
    weighted_average(&collect_terms(row, weights)).map(round_two_decimals)
}
