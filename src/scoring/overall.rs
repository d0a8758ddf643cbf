//! Equal-weight average across subjects.

use super::composite::{from_hundredths, to_hundredths};

/// Mean of all computed subject grades, rounded to two decimals.
///
/// Subjects without a grade are skipped; `None` when no subject has one.
/// Subject grades are already two-decimal values, so the mean is taken over
/// whole hundredths and only the final division rounds.
pub fn overall_average(subject_grades: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = subject_grades
        .into_iter()
        .flatten()
        .fold((0_i64, 0_i64), |(sum, count), grade| {
            (sum + to_hundredths(grade), count + 1)
        });

    (count > 0).then(|| from_hundredths(div_round_half_away(sum, count)))
}

/// Integer division rounding ties away from zero; `divisor` must be positive.
fn div_round_half_away(dividend: i64, divisor: i64) -> i64 {
    let half_up = (2 * dividend.abs() + divisor) / (2 * divisor);
    if dividend < 0 {
        -half_up
    } else {
        half_up
    }
}
