//! Fixed row and column keys of the grade table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// School subject graded on the report card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Deutsch,
    Mathe,
    Latein,
    Englisch,
    Kunst,
}

impl Subject {
    /// All subjects in table row order.
    pub const ALL: [Subject; 5] = [
        Subject::Deutsch,
        Subject::Mathe,
        Subject::Latein,
        Subject::Englisch,
        Subject::Kunst,
    ];

    /// Row index of this subject in the grade table.
    pub const fn index(self) -> usize {
        match self {
            Subject::Deutsch => 0,
            Subject::Mathe => 1,
            Subject::Latein => 2,
            Subject::Englisch => 3,
            Subject::Kunst => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Subject::Deutsch => "Deutsch",
            Subject::Mathe => "Mathe",
            Subject::Latein => "Latein",
            Subject::Englisch => "Englisch",
            Subject::Kunst => "Kunst",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Category of graded work.
///
/// Three written exams, oral participation and presentations. Each kind
/// contributes to the composite with its own weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentSlot {
    Exam1,
    Exam2,
    Exam3,
    Oral,
    Presentation,
}

/// Weighting group an assessment slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Exam,
    Oral,
    Presentation,
}

impl AssessmentSlot {
    /// All slots in table column order.
    pub const ALL: [AssessmentSlot; 5] = [
        AssessmentSlot::Exam1,
        AssessmentSlot::Exam2,
        AssessmentSlot::Exam3,
        AssessmentSlot::Oral,
        AssessmentSlot::Presentation,
    ];

    /// The three exam slots.
    pub const EXAMS: [AssessmentSlot; 3] = [
        AssessmentSlot::Exam1,
        AssessmentSlot::Exam2,
        AssessmentSlot::Exam3,
    ];

    /// Column index of this slot in the grade table.
    pub const fn index(self) -> usize {
        match self {
            AssessmentSlot::Exam1 => 0,
            AssessmentSlot::Exam2 => 1,
            AssessmentSlot::Exam3 => 2,
            AssessmentSlot::Oral => 3,
            AssessmentSlot::Presentation => 4,
        }
    }

    pub const fn kind(self) -> SlotKind {
        match self {
            AssessmentSlot::Exam1 | AssessmentSlot::Exam2 | AssessmentSlot::Exam3 => {
                SlotKind::Exam
            }
            AssessmentSlot::Oral => SlotKind::Oral,
            AssessmentSlot::Presentation => SlotKind::Presentation,
        }
    }

    /// Column header shown on the input screen.
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentSlot::Exam1 => "KA1",
            AssessmentSlot::Exam2 => "KA2",
            AssessmentSlot::Exam3 => "KA3",
            AssessmentSlot::Oral => "mündl.",
            AssessmentSlot::Presentation => "Referate",
        }
    }
}

impl fmt::Display for AssessmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
