use std::collections::BTreeMap;

use anyhow::Context;
use numba_stats::{
    aggregate,
    frequency::{self, Occurrence, OccurrenceTable},
    parity::{self, ParityCounts},
    sort::{self, SortOrder},
    summary::Summary,
    threshold::{self, ThresholdCounts},
};
use serde::Serialize;

/// A report that can be requested from the command line.
///
/// Reports are printed in declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ReportKind {
    #[display("mean")]
    Mean,
    #[display("median")]
    Median,
    #[display("range")]
    Range,
    #[display("occurrences")]
    Occurrences,
    #[display("mode")]
    Mode,
    #[display("values relative to mean")]
    RelativeToMean,
    #[display("values relative to median")]
    RelativeToMedian,
    #[display("parity")]
    Parity,
    #[display("sorted ascending")]
    SortAscending,
    #[display("sorted descending")]
    SortDescending,
}

impl ReportKind {
    /// Every report except sorting.
    pub(crate) const ALL_BUT_SORTING: [ReportKind; 8] = [
        ReportKind::Mean,
        ReportKind::Median,
        ReportKind::Range,
        ReportKind::Occurrences,
        ReportKind::Mode,
        ReportKind::RelativeToMean,
        ReportKind::RelativeToMedian,
        ReportKind::Parity,
    ];

    /// Mean, median, range and mode.
    pub(crate) const CENTRAL: [ReportKind; 4] = [
        ReportKind::Mean,
        ReportKind::Median,
        ReportKind::Range,
        ReportKind::Mode,
    ];

    /// Computes this report for `numbers`.
    ///
    /// `numbers` itself is never reordered; sort reports work on a copy.
    pub(crate) fn compute(self, numbers: &[i64]) -> anyhow::Result<Report> {
        let report = match self {
            ReportKind::Mean => Report::Mean(aggregate::mean(numbers).context(EMPTY)?),
            ReportKind::Median => Report::Median(aggregate::median(numbers).context(EMPTY)?),
            ReportKind::Range => Report::Range(aggregate::range(numbers).context(EMPTY)?),
            ReportKind::Occurrences => {
                Report::Occurrences(frequency::occurrence_counts(numbers))
            }
            ReportKind::Mode => Report::Mode(frequency::mode(numbers)),
            ReportKind::RelativeToMean => Report::RelativeToMean(
                threshold::count_relative_to_mean(numbers).context(EMPTY)?,
            ),
            ReportKind::RelativeToMedian => Report::RelativeToMedian(
                threshold::count_relative_to_median(numbers).context(EMPTY)?,
            ),
            ReportKind::Parity => Report::Parity(parity::count_parity(numbers)),
            ReportKind::SortAscending => {
                Report::Sorted(sort::sorted(numbers, SortOrder::Ascending))
            }
            ReportKind::SortDescending => {
                Report::Sorted(sort::sorted(numbers, SortOrder::Descending))
            }
        };
        Ok(report)
    }
}

const EMPTY: &str = "no numbers to analyze";

/// The computed result of a [`ReportKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Report {
    Mean(f64),
    Median(f64),
    Range(u64),
    Occurrences(OccurrenceTable),
    Mode(Vec<Occurrence>),
    RelativeToMean(ThresholdCounts),
    RelativeToMedian(ThresholdCounts),
    Parity(ParityCounts),
    Sorted(Vec<i64>),
}

impl Report {
    /// Splits a [`Summary`] into the reports it covers.
    ///
    /// The keys are exactly [`ReportKind::ALL_BUT_SORTING`].
    pub(crate) fn from_summary(summary: Summary) -> BTreeMap<ReportKind, Report> {
        let Summary {
            count: _,
            mean,
            median,
            range,
            occurrences,
            mode,
            relative_to_mean,
            relative_to_median,
            parity,
        } = summary;
        BTreeMap::from([
            (ReportKind::Mean, Report::Mean(mean)),
            (ReportKind::Median, Report::Median(median)),
            (ReportKind::Range, Report::Range(range)),
            (ReportKind::Occurrences, Report::Occurrences(occurrences)),
            (ReportKind::Mode, Report::Mode(mode)),
            (ReportKind::RelativeToMean, Report::RelativeToMean(relative_to_mean)),
            (
                ReportKind::RelativeToMedian,
                Report::RelativeToMedian(relative_to_median),
            ),
            (ReportKind::Parity, Report::Parity(parity)),
        ])
    }
}
