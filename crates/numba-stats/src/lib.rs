//! Statistics engine of the numba number analyzer.
//!
//! This crate computes descriptive statistics over small lists of integers:
//!
//! - **Sorting**: Deterministic in-place partition-exchange sort, ascending or descending
//! - **Aggregates**: Mean, median and range
//! - **Frequency**: Distinct values, occurrence counts and modes
//! - **Thresholds**: Values below and above the mean or the median
//! - **Parity**: Odd and even tallies
//! - **Summary**: All of the above except sorting, in one structure
//!
//! Only [`sort::sort`] and [`sort::quicksort`] modify their input. Every
//! other function reads the list and sorts a private copy when it needs one.
//! Statistics that are undefined for an empty list return `None`.
//!
//! # Modules
//!
//! - [`sort`]: Partitioning and sorting
//! - [`aggregate`]: Mean, median and range
//! - [`frequency`]: Occurrence counts and modes
//! - [`threshold`]: Counts relative to the mean or the median
//! - [`parity`]: Odd/even counts
//! - [`summary`]: Combined report
//!
//! # Examples
//!
//! ## Sorting
//!
//! ```
//! use numba_stats::sort::{SortOrder, sort};
//!
//! let mut values = vec![3, -1, 2];
//! sort(&mut values, SortOrder::Ascending);
//! assert_eq!(values, vec![-1, 2, 3]);
//! ```
//!
//! ## Computing statistics
//!
//! ```
//! use numba_stats::{aggregate, frequency, parity};
//!
//! let values = [5, 1, 9, 3, 1];
//! assert_eq!(aggregate::mean(&values), Some(3.8));
//! assert_eq!(aggregate::median(&values), Some(3.0));
//! assert_eq!(aggregate::range(&values), Some(8));
//! assert_eq!(frequency::mode(&values).len(), 1);
//! assert_eq!(parity::count_parity(&values).odd, 5);
//! ```

pub mod aggregate;
pub mod frequency;
pub mod parity;
pub mod sort;
pub mod summary;
pub mod threshold;
