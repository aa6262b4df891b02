//! In-place partition-exchange sorting.
//!
//! The sorter always picks the leftmost element of a range as its pivot.
//! This keeps the output ordering deterministic, at the price of quadratic
//! behavior on already-sorted input. Inputs are bounded by the number of
//! command-line arguments, so that cost never matters in practice.
//!
//! Sorting is not stable: equal values may be reordered among themselves.
//! For integers that difference is unobservable.

use serde::Serialize;

/// Direction of a sort.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest value first.
    #[display("ascending")]
    Ascending,
    /// Largest value first.
    #[display("descending")]
    Descending,
}

/// Partitions `values[start..=end]` around `pivot` and returns the split point.
///
/// Two cursors converge from both ends of the range, swapping elements that
/// sit on the wrong side of the pivot. For [`SortOrder::Ascending`] the values
/// less than or equal to the pivot end up left of the split point, and for
/// [`SortOrder::Descending`] the values greater than or equal to it do.
///
/// `pivot` must be the value currently stored at `values[start]`. When the
/// cursors meet, the pivot value has been carried to the split point.
///
/// # Panics
///
/// Panics if `end` is out of bounds for `values`.
///
/// # Examples
///
/// ```
/// use numba_stats::sort::{SortOrder, partition};
///
/// let mut values = [3, 5, 1, 4, 2];
/// let split = partition(&mut values, 3, 0, 4, SortOrder::Ascending);
/// assert_eq!(values[split], 3);
/// assert!(values[..split].iter().all(|&v| v <= 3));
/// assert!(values[split + 1..].iter().all(|&v| v > 3));
/// ```
pub fn partition(
    values: &mut [i64],
    pivot: i64,
    start: usize,
    end: usize,
    order: SortOrder,
) -> usize {
    let mut left = start;
    let mut right = end;

    while left < right {
        // find an element that belongs on the left side
        while right > left && belongs_right(values[right], pivot, order) {
            right -= 1;
        }
        values.swap(left, right);

        // find an element that belongs on the right side
        while left < right && !belongs_right(values[left], pivot, order) {
            left += 1;
        }
        values.swap(left, right);
    }

    left
}

fn belongs_right(value: i64, pivot: i64, order: SortOrder) -> bool {
    match order {
        SortOrder::Ascending => value > pivot,
        SortOrder::Descending => value <= pivot,
    }
}

/// Sorts `values[start..=end]` in place.
///
/// A range with `end <= start` holds at most one element and is left as is.
///
/// # Panics
///
/// Panics if `end` is out of bounds for `values` and `end > start`.
///
/// # Examples
///
/// ```
/// use numba_stats::sort::{SortOrder, quicksort};
///
/// let mut values = [9, 4, 7, 1, 8];
/// quicksort(&mut values, 1, 3, SortOrder::Ascending);
/// assert_eq!(values, [9, 1, 4, 7, 8]);
/// ```
pub fn quicksort(values: &mut [i64], start: usize, end: usize, order: SortOrder) {
    if end <= start {
        return;
    }

    let pivot = values[start];
    let split = partition(values, pivot, start, end, order);
    debug_assert_eq!(values[split], pivot, "pivot must settle at the split point");
    log::trace!("partitioned [{start}, {end}] {order} around {pivot}, split at {split}");

    if split > start {
        quicksort(values, start, split - 1, order);
    }
    quicksort(values, split + 1, end, order);
}

/// Sorts the whole slice in place.
///
/// # Examples
///
/// ```
/// use numba_stats::sort::{SortOrder, sort};
///
/// let mut values = [2, -7, 5, 0];
/// sort(&mut values, SortOrder::Descending);
/// assert_eq!(values, [5, 2, 0, -7]);
/// ```
pub fn sort(values: &mut [i64], order: SortOrder) {
    if let Some(end) = values.len().checked_sub(1) {
        quicksort(values, 0, end, order);
    }
}

/// Returns a sorted copy of `values`, leaving the input untouched.
#[must_use]
pub fn sorted(values: &[i64], order: SortOrder) -> Vec<i64> {
    let mut copy = values.to_vec();
    sort(&mut copy, order);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_ascending() {
        let mut values = vec![5, 1, 9, 3, -2, 7];
        sort(&mut values, SortOrder::Ascending);
        assert_eq!(values, vec![-2, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_sort_descending() {
        let mut values = vec![5, 1, 9, 3, -2, 7];
        sort(&mut values, SortOrder::Descending);
        assert_eq!(values, vec![9, 7, 5, 3, 1, -2]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<i64> = vec![];
        sort(&mut empty, SortOrder::Ascending);
        assert!(empty.is_empty());

        let mut single = vec![42];
        sort(&mut single, SortOrder::Ascending);
        assert_eq!(single, vec![42]);
        sort(&mut single, SortOrder::Descending);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_sort_all_equal() {
        let mut values = vec![7; 16];
        sort(&mut values, SortOrder::Ascending);
        assert_eq!(values, vec![7; 16]);
        sort(&mut values, SortOrder::Descending);
        assert_eq!(values, vec![7; 16]);
    }

    #[test]
    fn test_sort_with_duplicates() {
        let mut values = vec![3, 1, 3, 2, 1, 3, 2];
        sort(&mut values, SortOrder::Ascending);
        assert_eq!(values, vec![1, 1, 2, 2, 3, 3, 3]);
        sort(&mut values, SortOrder::Descending);
        assert_eq!(values, vec![3, 3, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn test_sort_already_sorted_and_reversed() {
        let ascending = (0..200).collect::<Vec<i64>>();
        let descending = ascending.iter().rev().copied().collect::<Vec<_>>();

        assert_eq!(sorted(&descending, SortOrder::Ascending), ascending);
        assert_eq!(sorted(&ascending, SortOrder::Descending), descending);
        assert_eq!(sorted(&ascending, SortOrder::Ascending), ascending);
    }

    #[test]
    fn test_sort_extreme_values() {
        let mut values = vec![i64::MAX, 0, i64::MIN, -1, i64::MAX, i64::MIN];
        sort(&mut values, SortOrder::Ascending);
        assert_eq!(values, vec![i64::MIN, i64::MIN, -1, 0, i64::MAX, i64::MAX]);
    }

    #[test]
    fn test_quicksort_subrange_only() {
        let mut values = vec![9, 3, 2, 1, 0];
        quicksort(&mut values, 1, 3, SortOrder::Ascending);
        assert_eq!(values, vec![9, 1, 2, 3, 0]);
    }

    #[test]
    fn test_quicksort_degenerate_range_is_noop() {
        let mut values = vec![3, 2, 1];
        quicksort(&mut values, 2, 2, SortOrder::Ascending);
        quicksort(&mut values, 2, 0, SortOrder::Ascending);
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn test_partition_ascending_split() {
        let mut values = vec![4, 8, 1, 4, 9, 2];
        let split = partition(&mut values, 4, 0, 5, SortOrder::Ascending);
        assert_eq!(values[split], 4);
        assert!(values[..split].iter().all(|&v| v <= 4));
        assert!(values[split + 1..].iter().all(|&v| v > 4));
    }

    #[test]
    fn test_partition_descending_split() {
        let mut values = vec![4, 8, 1, 4, 9, 2];
        let split = partition(&mut values, 4, 0, 5, SortOrder::Descending);
        assert_eq!(values[split], 4);
        assert!(values[..split].iter().all(|&v| v >= 4));
        assert!(values[split + 1..].iter().all(|&v| v <= 4));
    }

    #[test]
    fn test_partition_single_element_range() {
        let mut values = vec![5, 6, 7];
        assert_eq!(partition(&mut values, 6, 1, 1, SortOrder::Ascending), 1);
        assert_eq!(values, vec![5, 6, 7]);
    }

    #[test]
    fn test_sorted_leaves_input_untouched() {
        let values = vec![3, 1, 2];
        let copy = sorted(&values, SortOrder::Ascending);
        assert_eq!(copy, vec![1, 2, 3]);
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_order_variants() {
        assert!(SortOrder::Ascending.is_ascending());
        assert!(SortOrder::Descending.is_descending());
        assert_eq!(SortOrder::Descending.to_string(), "descending");
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn multiset(values: &[i64]) -> Vec<i64> {
            let mut copy = values.to_vec();
            copy.sort_unstable();
            copy
        }

        proptest! {
            #[test]
            fn sort_matches_std(values in proptest::collection::vec(-50i64..50, 0..64)) {
                let mut expected = values.clone();
                expected.sort_unstable();
                prop_assert_eq!(sorted(&values, SortOrder::Ascending), expected.clone());
                expected.reverse();
                prop_assert_eq!(sorted(&values, SortOrder::Descending), expected);
            }

            #[test]
            fn sort_preserves_multiset(values in proptest::collection::vec(any::<i64>(), 1..64)) {
                let ascending = sorted(&values, SortOrder::Ascending);
                prop_assert_eq!(multiset(&ascending), multiset(&values));
            }

            #[test]
            fn descending_after_ascending_is_reversed(
                values in proptest::collection::vec(-20i64..20, 1..64)
            ) {
                let ascending = sorted(&values, SortOrder::Ascending);
                let mut descending = ascending.clone();
                sort(&mut descending, SortOrder::Descending);
                let reversed = ascending.iter().rev().copied().collect::<Vec<_>>();
                prop_assert_eq!(descending, reversed);
            }
        }
    }
}
