//! Mean, median and range.
//!
//! Every function here takes an immutable view of the list and returns
//! `None` for an empty list, where none of these statistics is defined.

use std::cmp::Ordering;

use crate::sort::{self, SortOrder};

/// An exact rational value, `numerator / denominator`.
///
/// Means and medians of integers are rationals with small denominators.
/// Keeping them exact lets callers compare input values against them without
/// the rounding of an `f64`, which matters once values exceed 2^53.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use numba_stats::aggregate::Ratio;
///
/// let half = Ratio::new(5, 2).unwrap();
/// assert_eq!(half.to_f64(), 2.5);
/// assert_eq!(half.cmp_integer(2), Ordering::Less);
/// assert_eq!(half.cmp_integer(3), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    numerator: i128,
    denominator: i128,
}

impl Ratio {
    /// Creates `numerator / denominator`.
    ///
    /// Returns `None` unless `denominator` is positive.
    #[must_use]
    pub fn new(numerator: i128, denominator: i128) -> Option<Self> {
        (denominator > 0).then_some(Self {
            numerator,
            denominator,
        })
    }

    #[must_use]
    pub fn numerator(&self) -> i128 {
        self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> i128 {
        self.denominator
    }

    /// Compares an integer against this value without rounding.
    ///
    /// The denominators produced by this module are list lengths or 2, so the
    /// cross product stays far inside `i128`.
    #[must_use]
    pub fn cmp_integer(&self, value: i64) -> Ordering {
        (i128::from(value) * self.denominator).cmp(&self.numerator)
    }

    /// The nearest `f64`, for display.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Computes the arithmetic mean of `values` as an exact [`Ratio`].
///
/// The sum is accumulated in an `i128`, which cannot overflow for any slice of
/// `i64` values that fits in memory.
#[must_use]
pub fn mean_ratio(values: &[i64]) -> Option<Ratio> {
    let sum = values.iter().map(|&v| i128::from(v)).sum::<i128>();
    Ratio::new(sum, values.len() as i128)
}

/// Computes the arithmetic mean of `values`.
///
/// # Returns
///
/// * `Some(mean)` - if `values` contains at least one value
/// * `None` - if `values` is empty
///
/// # Examples
///
/// ```
/// use numba_stats::aggregate::mean;
///
/// assert_eq!(mean(&[1, 2, 3, 4]), Some(2.5));
/// assert_eq!(mean(&[]), None);
/// ```
#[must_use]
pub fn mean(values: &[i64]) -> Option<f64> {
    mean_ratio(values).map(Ratio::to_f64)
}

/// Computes the median of `values` as an exact [`Ratio`].
///
/// A private copy is sorted, so the caller's ordering is preserved. For an
/// even number of values the median is the average of the two middle values.
#[must_use]
pub fn median_ratio(values: &[i64]) -> Option<Ratio> {
    if values.is_empty() {
        return None;
    }
    let sorted = sort::sorted(values, SortOrder::Ascending);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ratio::new(i128::from(sorted[mid - 1]) + i128::from(sorted[mid]), 2)
    } else {
        Ratio::new(i128::from(sorted[mid]), 1)
    }
}

/// Computes the median of `values`.
///
/// # Returns
///
/// * `Some(median)` - if `values` contains at least one value
/// * `None` - if `values` is empty
///
/// # Examples
///
/// ```
/// use numba_stats::aggregate::median;
///
/// assert_eq!(median(&[3, 1, 2]), Some(2.0));
/// assert_eq!(median(&[1, 2, 3, 4]), Some(2.5));
/// ```
#[must_use]
pub fn median(values: &[i64]) -> Option<f64> {
    median_ratio(values).map(Ratio::to_f64)
}

/// Computes the difference between the largest and the smallest value.
///
/// The result is unsigned so that the full `i64` span fits.
///
/// # Examples
///
/// ```
/// use numba_stats::aggregate::range;
///
/// assert_eq!(range(&[5, 1, 9, 3]), Some(8));
/// assert_eq!(range(&[7]), Some(0));
/// ```
#[must_use]
pub fn range(values: &[i64]) -> Option<u64> {
    let (&first, rest) = values.split_first()?;
    let (min, max) = rest.iter().fold((first, first), |(min, max), &v| {
        (min.min(v), max.max(v))
    });
    Some(max.abs_diff(min))
}
