use std::{
    collections::{BTreeMap, BTreeSet},
    ffi::OsString,
    io::{self, Write},
};

use anyhow::Context;
use clap::{CommandFactory, Parser, error::ErrorKind};
use numba_stats::summary::Summary;

use crate::output::{Format, Output};

pub(crate) use self::report::{Report, ReportKind};

mod report;

#[expect(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Parser)]
#[command(
    name = "numba",
    author,
    version,
    about = "numba, a NUMBer Analyzer",
    long_about = "numba, a NUMBer Analyzer\n\n\
        Sorts numbers, finds the median, mean, mode, range, and more.\n\
        Without any option the given numbers are sorted from smallest to largest."
)]
pub(crate) struct CommandArgs {
    /// Display the mean/average of the given numbers
    #[arg(short = 'a')]
    mean: bool,
    /// Perform all operations except sorting on the given numbers
    #[arg(short = 'A')]
    all: bool,
    /// Display the number of occurrences of each unique number
    #[arg(short = 'c')]
    count: bool,
    /// Display the amount of numbers that are greater than and the amount that are less than the mean/average
    #[arg(short = 'g')]
    relative_to_mean: bool,
    /// Display the amount of numbers that are greater than and the amount that are less than the median
    #[arg(short = 'G')]
    relative_to_median: bool,
    /// Display the median (middle value) of the given numbers
    #[arg(short = 'm')]
    median: bool,
    /// Display the mode (most common value) of the given numbers
    #[arg(short = 'M')]
    mode: bool,
    /// Display the amount of odd and the amount of even numbers
    #[arg(short = 'o')]
    parity: bool,
    /// Display the range of the given numbers
    #[arg(short = 'r')]
    range: bool,
    /// Display mean, median, mode, and range of the given numbers
    #[arg(short = 'R')]
    central: bool,
    /// Sort the given numbers from smallest to largest
    #[arg(short = 's')]
    sort_ascending: bool,
    /// Sort the given numbers from largest to smallest
    #[arg(short = 'S')]
    sort_descending: bool,
    /// Print the reports as a JSON document
    #[arg(long)]
    json: bool,
    /// The numbers to analyze
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<i64>,
}

impl CommandArgs {
    /// Collects the requested reports.
    ///
    /// Sorting ascending is the default when no report was requested.
    fn reports(&self) -> BTreeSet<ReportKind> {
        let mut reports = BTreeSet::new();
        let flags = [
            (self.mean, ReportKind::Mean),
            (self.median, ReportKind::Median),
            (self.range, ReportKind::Range),
            (self.count, ReportKind::Occurrences),
            (self.mode, ReportKind::Mode),
            (self.relative_to_mean, ReportKind::RelativeToMean),
            (self.relative_to_median, ReportKind::RelativeToMedian),
            (self.parity, ReportKind::Parity),
            (self.sort_ascending, ReportKind::SortAscending),
            (self.sort_descending, ReportKind::SortDescending),
        ];
        reports.extend(flags.into_iter().filter(|(set, _)| *set).map(|(_, k)| k));
        if self.all {
            reports.extend(ReportKind::ALL_BUT_SORTING);
        }
        if self.central {
            reports.extend(ReportKind::CENTRAL);
        }
        if reports.is_empty() {
            reports.insert(ReportKind::SortAscending);
        }
        reports
    }

    fn format(&self) -> Format {
        if self.json { Format::Json } else { Format::Text }
    }
}

pub fn run() -> anyhow::Result<()> {
    execute(std::env::args_os(), io::stdout().lock())
}

/// Parses `args` and writes the requested reports to `writer`.
///
/// Usage is written instead when an argument is not recognized or no numbers
/// were given. Both cases return `Ok(())`.
fn execute<I, T, W>(args: I, mut writer: W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = match CommandArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::UnknownArgument => {
            log::debug!("unrecognized argument: {err}");
            return write_usage(&mut writer);
        }
        Err(err) => err.exit(),
    };

    if args.numbers.is_empty() {
        return write_usage(&mut writer);
    }

    let reports = args.reports();
    log::debug!(
        "analyzing {} numbers, reports: {reports:?}",
        args.numbers.len()
    );

    let mut precomputed = if args.all {
        let summary = Summary::new(&args.numbers).context("no numbers to summarize")?;
        Report::from_summary(summary)
    } else {
        BTreeMap::new()
    };

    let mut output = Output::new(writer, args.format());
    for kind in reports {
        let report = match precomputed.remove(&kind) {
            Some(report) => report,
            None => {
                log::debug!("computing {kind}");
                kind.compute(&args.numbers)?
            }
        };
        output.push(kind, report)?;
    }
    output.finish()?;
    Ok(())
}

fn write_usage<W>(writer: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    CommandArgs::command().write_help(writer)?;
    Ok(())
}
