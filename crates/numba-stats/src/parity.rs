//! Odd and even tallies.

use serde::Serialize;

/// Number of odd and even values in a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParityCounts {
    pub odd: usize,
    pub even: usize,
}

impl ParityCounts {
    /// Number of values counted, equal to the length of the input.
    #[must_use]
    pub fn total(&self) -> usize {
        self.odd + self.even
    }
}

/// Counts the odd and even values of `values`.
///
/// A value is even when its remainder modulo 2 is zero. Negative odd values
/// have a remainder of `-1`, so oddness is never tested with `== 1`.
///
/// # Examples
///
/// ```
/// use numba_stats::parity::{ParityCounts, count_parity};
///
/// assert_eq!(count_parity(&[-3, -2, -1, 0, 1, 2]), ParityCounts { odd: 3, even: 3 });
/// ```
#[must_use]
pub fn count_parity(values: &[i64]) -> ParityCounts {
    let even = values.iter().filter(|&&v| v % 2 == 0).count();
    ParityCounts {
        odd: values.len() - even,
        even,
    }
}
