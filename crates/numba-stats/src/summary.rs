//! Combined report of every statistic except sorting.

use serde::Serialize;

use crate::{
    aggregate,
    frequency::{Occurrence, OccurrenceTable},
    parity::{self, ParityCounts},
    threshold::{self, ThresholdCounts},
};

/// Every statistic of a number list except sorting.
///
/// This structure combines:
/// - Aggregate statistics (mean, median, range)
/// - Frequency analysis (occurrence counts and modes)
/// - Threshold counts relative to the mean and the median
/// - Odd/even tallies
///
/// # Examples
///
/// ```
/// use numba_stats::summary::Summary;
///
/// let summary = Summary::new(&[4, 1, 4, 3]).unwrap();
///
/// assert_eq!(summary.mean, 3.0);
/// assert_eq!(summary.median, 3.5);
/// assert_eq!(summary.range, 3);
/// assert_eq!(summary.mode.len(), 1);
/// assert_eq!(summary.parity.even, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of values in the list.
    pub count: usize,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median.
    pub median: f64,
    /// Largest value minus smallest value.
    pub range: u64,
    /// Occurrence count of every distinct value.
    pub occurrences: OccurrenceTable,
    /// Values tied for the highest count, empty when nothing repeats.
    pub mode: Vec<Occurrence>,
    /// Values below and above the mean.
    pub relative_to_mean: ThresholdCounts,
    /// Values below and above the median.
    pub relative_to_median: ThresholdCounts,
    /// Odd and even tallies.
    pub parity: ParityCounts,
}

impl Summary {
    /// Computes the summary of `values`.
    ///
    /// The input is read only; sorting happens on private copies.
    ///
    /// # Returns
    ///
    /// * `Some(Summary)` - if `values` contains at least one value
    /// * `None` - if `values` is empty
    #[must_use]
    pub fn new(values: &[i64]) -> Option<Self> {
        let mean = aggregate::mean_ratio(values)?;
        let median = aggregate::median_ratio(values)?;
        let range = aggregate::range(values)?;
        let occurrences = OccurrenceTable::new(values);
        let mode = occurrences.mode();

        Some(Self {
            count: values.len(),
            mean: mean.to_f64(),
            median: median.to_f64(),
            range,
            occurrences,
            mode,
            relative_to_mean: threshold::count_relative_to(values, mean),
            relative_to_median: threshold::count_relative_to(values, median),
            parity: parity::count_parity(values),
        })
    }
}
