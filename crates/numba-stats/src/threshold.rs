//! Counting values below and above a reference statistic.

use std::cmp::Ordering;

use serde::Serialize;

use crate::aggregate::{self, Ratio};

/// Counts of values strictly below and strictly above a reference value.
///
/// Values exactly equal to the reference are part of neither count, so
/// `less + greater + equal() == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdCounts {
    /// The value the input was compared against.
    pub reference: f64,
    /// Number of values strictly less than `reference`.
    pub less: usize,
    /// Number of values strictly greater than `reference`.
    pub greater: usize,
    /// Length of the input.
    pub total: usize,
}

impl ThresholdCounts {
    /// Number of values exactly equal to the reference.
    #[must_use]
    pub fn equal(&self) -> usize {
        self.total - self.less - self.greater
    }

    /// Share of values below the reference, in percent.
    #[must_use]
    pub fn less_percentage(&self) -> f64 {
        percentage(self.less, self.total)
    }

    /// Share of values above the reference, in percent.
    #[must_use]
    pub fn greater_percentage(&self) -> f64 {
        percentage(self.greater, self.total)
    }
}

#[expect(clippy::cast_precision_loss)]
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

/// Counts the values strictly below and strictly above `reference`.
///
/// Comparisons are exact, so values beyond the precision of an `f64` are
/// still classified correctly.
///
/// # Examples
///
/// ```
/// use numba_stats::{aggregate::Ratio, threshold::count_relative_to};
///
/// let counts = count_relative_to(&[1, 2, 3, 4, 5], Ratio::new(3, 1).unwrap());
/// assert_eq!((counts.less, counts.greater, counts.equal()), (2, 2, 1));
/// ```
#[must_use]
pub fn count_relative_to(values: &[i64], reference: Ratio) -> ThresholdCounts {
    let mut less = 0;
    let mut greater = 0;
    for &value in values {
        match reference.cmp_integer(value) {
            Ordering::Less => less += 1,
            Ordering::Greater => greater += 1,
            Ordering::Equal => {}
        }
    }
    ThresholdCounts {
        reference: reference.to_f64(),
        less,
        greater,
        total: values.len(),
    }
}

/// Counts the values strictly below and strictly above the mean.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn count_relative_to_mean(values: &[i64]) -> Option<ThresholdCounts> {
    let mean = aggregate::mean_ratio(values)?;
    Some(count_relative_to(values, mean))
}

/// Counts the values strictly below and strictly above the median.
///
/// Returns `None` for an empty list.
///
/// # Examples
///
/// ```
/// use numba_stats::threshold::count_relative_to_median;
///
/// let counts = count_relative_to_median(&[1, 2, 3, 4]).unwrap();
/// assert_eq!(counts.reference, 2.5);
/// assert_eq!((counts.less, counts.greater), (2, 2));
/// ```
#[must_use]
pub fn count_relative_to_median(values: &[i64]) -> Option<ThresholdCounts> {
    let median = aggregate::median_ratio(values)?;
    Some(count_relative_to(values, median))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_mean() {
        // mean = 2.5, nothing equal
        let counts = count_relative_to_mean(&[1, 2, 3, 4]).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (2, 2, 0));

        // mean = 3, one value equal
        let counts = count_relative_to_mean(&[1, 3, 5]).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (1, 1, 1));

        // skewed: mean = 4
        let counts = count_relative_to_mean(&[1, 1, 1, 13]).unwrap();
        assert_eq!((counts.less, counts.greater), (3, 1));
    }

    #[test]
    fn test_relative_to_median() {
        let counts = count_relative_to_median(&[1, 1, 1, 13]).unwrap();
        assert_eq!(counts.reference, 1.0);
        assert_eq!((counts.less, counts.greater, counts.equal()), (0, 1, 3));

        let counts = count_relative_to_median(&[9, 2, 7]).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (1, 1, 1));
    }

    #[test]
    fn test_relative_to_single_value() {
        let counts = count_relative_to_mean(&[8]).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (0, 0, 1));
        let counts = count_relative_to_median(&[8]).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (0, 0, 1));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(count_relative_to_mean(&[]), None);
        assert_eq!(count_relative_to_median(&[]), None);
    }

    #[test]
    fn test_large_values_compare_exactly() {
        let big = 1_i64 << 53;
        let values = [big, big + 2];

        let counts = count_relative_to_mean(&values).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (1, 1, 0));

        let counts = count_relative_to_median(&values).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (1, 1, 0));

        let values = [i64::MAX, i64::MAX - 1, i64::MAX - 2];
        let counts = count_relative_to_mean(&values).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (1, 1, 1));
        let counts = count_relative_to_median(&values).unwrap();
        assert_eq!((counts.less, counts.greater, counts.equal()), (1, 1, 1));
    }

    #[test]
    fn test_percentages() {
        let counts = count_relative_to(&[1, 2, 3, 4], Ratio::new(3, 2).unwrap());
        assert_eq!(counts.less_percentage(), 25.0);
        assert_eq!(counts.greater_percentage(), 75.0);

        let counts = count_relative_to(&[], Ratio::new(0, 1).unwrap());
        assert_eq!(counts.less_percentage(), 0.0);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn exact_equal_count(values: &[i64], reference: Ratio) -> usize {
            values
                .iter()
                .filter(|&&v| reference.cmp_integer(v) == std::cmp::Ordering::Equal)
                .count()
        }

        proptest! {
            #[test]
            fn mean_counts_never_exceed_length(
                values in proptest::collection::vec(any::<i64>(), 1..100)
            ) {
                let counts = count_relative_to_mean(&values).unwrap();
                prop_assert!(counts.less + counts.greater <= values.len());
                let sum = values.iter().map(|&v| i128::from(v)).sum::<i128>();
                let n = values.len() as i128;
                let any_equal = values.iter().any(|&v| i128::from(v) * n == sum);
                prop_assert_eq!(counts.less + counts.greater == values.len(), !any_equal);
            }

            #[test]
            fn median_counts_partition_input(
                values in proptest::collection::vec(any::<i64>(), 1..100)
            ) {
                let counts = count_relative_to_median(&values).unwrap();
                let median = aggregate::median_ratio(&values).unwrap();
                let equal = exact_equal_count(&values, median);
                prop_assert_eq!(counts.less + counts.greater + equal, values.len());
                prop_assert_eq!(counts.equal(), equal);
            }
        }
    }
}
