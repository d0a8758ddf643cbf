//! Grade values on the 1 (best) to 6 (worst) scale.

use super::errors::{Error, Result};
use std::fmt;

/// A single grade in 1..=6.
///
/// Construction is the only place the scale is checked; everything
/// downstream of a `Grade` can rely on the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidGrade(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content of one grade table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    /// No grade entered yet
    #[default]
    Unset,
    Grade(Grade),
}

impl CellValue {
    /// Label shown for an unset cell.
    pub const UNSET_LABEL: &'static str = "-";

    pub fn grade(self) -> Option<Grade> {
        match self {
            CellValue::Unset => None,
            CellValue::Grade(grade) => Some(grade),
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, CellValue::Grade(_))
    }

    /// Next selector option, wrapping from 6 back to unset.
    pub fn cycle_next(self) -> Self {
        match self {
            CellValue::Unset => CellValue::Grade(Grade(Grade::MIN)),
            CellValue::Grade(Grade(Grade::MAX)) => CellValue::Unset,
            CellValue::Grade(Grade(v)) => CellValue::Grade(Grade(v + 1)),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Unset => f.write_str(Self::UNSET_LABEL),
            CellValue::Grade(grade) => write!(f, "{grade}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_whole_scale() {
        for v in 1..=6 {
            assert_eq!(Grade::new(v).map(Grade::value).ok(), Some(v));
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(Grade::new(0), Err(Error::InvalidGrade(0))));
        assert!(matches!(Grade::new(7), Err(Error::InvalidGrade(7))));
        assert!(matches!(Grade::new(42), Err(Error::InvalidGrade(42))));
    }

    #[test]
    fn cycling_visits_every_option_and_wraps() {
        let mut cell = CellValue::Unset;
        let labels: Vec<String> = (0..7)
            .map(|_| {
                cell = cell.cycle_next();
                cell.to_string()
            })
            .collect();
        assert_eq!(labels, ["1", "2", "3", "4", "5", "6", "-"]);
    }
}
