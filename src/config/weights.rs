//! Weights of the three assessment groups in a subject composite.

use crate::core::SlotKind;
use serde::{Deserialize, Serialize};

/// Assessment group weights
///
/// Only the groups present in a subject row take part in its composite and
/// their weights are renormalized there, so the weights here need not sum to
/// 1.0. Each must be finite and within (0.0, 1.0]: a zero weight would leave
/// a subject graded only in that group without a grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentWeights {
    /// Weight of the mean of the written exams (0.0-1.0)
    #[serde(default = "default_exams_weight")]
    pub exams: f64,

    /// Weight of oral participation (0.0-1.0)
    #[serde(default = "default_oral_weight")]
    pub oral: f64,

    /// Weight of presentations (0.0-1.0)
    #[serde(default = "default_presentation_weight")]
    pub presentation: f64,
}

pub fn default_exams_weight() -> f64 {
    0.4
}

pub fn default_oral_weight() -> f64 {
    0.5
}

pub fn default_presentation_weight() -> f64 {
    0.1
}

impl Default for AssessmentWeights {
    fn default() -> Self {
        Self {
            exams: default_exams_weight(),
            oral: default_oral_weight(),
            presentation: default_presentation_weight(),
        }
    }
}

impl AssessmentWeights {
    pub fn for_kind(&self, kind: SlotKind) -> f64 {
        match kind {
            SlotKind::Exam => self.exams,
            SlotKind::Oral => self.oral,
            SlotKind::Presentation => self.presentation,
        }
    }

    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight > 0.0 && weight <= 1.0
    }

    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be greater than 0.0 and at most 1.0, got {}", name, weight))
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.exams, "Exams")?;
        Self::validate_weight(self.oral, "Oral")?;
        Self::validate_weight(self.presentation, "Presentation")
    }
}
