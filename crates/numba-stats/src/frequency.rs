//! Distinct values, occurrence counts and modes.
//!
//! All functions sort a private copy of the input first so that equal values
//! are contiguous. The caller's list is never reordered.

use serde::Serialize;

use crate::sort::{self, SortOrder};

/// A distinct value together with the number of times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    /// The distinct value.
    pub value: i64,
    /// How many times `value` occurs in the input.
    pub count: usize,
}

/// Returns the distinct values of `values` in ascending order.
///
/// # Examples
///
/// ```
/// use numba_stats::frequency::distinct_values;
///
/// assert_eq!(distinct_values(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn distinct_values(values: &[i64]) -> Vec<i64> {
    let sorted = sort::sorted(values, SortOrder::Ascending);
    let mut distinct = Vec::with_capacity(sorted.len());
    for value in sorted {
        if distinct.last() != Some(&value) {
            distinct.push(value);
        }
    }
    distinct
}

/// Occurrence counts of every distinct value of a list, in ascending value
/// order.
///
/// # Examples
///
/// ```
/// use numba_stats::frequency::{Occurrence, OccurrenceTable};
///
/// let table = OccurrenceTable::new(&[2, 1, 2, 2, 5]);
/// assert_eq!(table.total(), 5);
/// assert_eq!(
///     table.as_slice(),
///     &[
///         Occurrence { value: 1, count: 1 },
///         Occurrence { value: 2, count: 3 },
///         Occurrence { value: 5, count: 1 },
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OccurrenceTable {
    entries: Vec<Occurrence>,
}

impl OccurrenceTable {
    /// Counts how often each distinct value of `values` occurs.
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        let entries = distinct_values(values)
            .into_iter()
            .map(|value| Occurrence {
                value,
                count: values.iter().filter(|&&v| v == value).count(),
            })
            .collect();
        Self { entries }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the input list.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The highest count of any value, or `None` for an empty table.
    #[must_use]
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.count).max()
    }

    /// Returns every entry sharing the highest count.
    ///
    /// The result is empty when no value occurs more than once.
    #[must_use]
    pub fn mode(&self) -> Vec<Occurrence> {
        match self.max_count() {
            Some(max) if max > 1 => self
                .entries
                .iter()
                .filter(|e| e.count == max)
                .copied()
                .collect(),
            _ => vec![],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Occurrence> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Occurrence] {
        &self.entries
    }
}

/// Counts how often each distinct value occurs.
///
/// Shorthand for [`OccurrenceTable::new`].
#[must_use]
pub fn occurrence_counts(values: &[i64]) -> OccurrenceTable {
    OccurrenceTable::new(values)
}

/// Finds the most common values.
///
/// Every value tied for the highest count is returned in ascending order.
/// When no value repeats the result is empty.
///
/// # Examples
///
/// ```
/// use numba_stats::frequency::{Occurrence, mode};
///
/// assert_eq!(
///     mode(&[1, 1, 2, 2, 3]),
///     vec![Occurrence { value: 1, count: 2 }, Occurrence { value: 2, count: 2 }]
/// );
/// assert!(mode(&[1, 2, 3]).is_empty());
/// ```
#[must_use]
pub fn mode(values: &[i64]) -> Vec<Occurrence> {
    OccurrenceTable::new(values).mode()
}
