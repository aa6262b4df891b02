use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use anyhow::Context;
use numba_stats::threshold::ThresholdCounts;

use crate::command::{Report, ReportKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// One section per report, laid out for reading in a terminal
    Text,
    /// A single JSON object keyed by report name
    Json,
}

/// Destination of the computed reports.
///
/// Text reports are written as they arrive. JSON reports are collected and
/// written as one document by [`Output::finish`].
#[derive(Debug)]
pub(crate) struct Output<W> {
    writer: W,
    format: Format,
    started: bool,
    collected: BTreeMap<ReportKind, Report>,
}

impl<W> Output<W>
where
    W: Write,
{
    pub(crate) fn new(writer: W, format: Format) -> Self {
        Self {
            writer,
            format,
            started: false,
            collected: BTreeMap::new(),
        }
    }

    pub(crate) fn push(&mut self, kind: ReportKind, report: Report) -> anyhow::Result<()> {
        match self.format {
            Format::Text => {
                if !self.started {
                    writeln!(self.writer)?;
                    self.started = true;
                }
                write_text(&mut self.writer, &report)
                    .with_context(|| format!("Failed to write {kind} report"))?;
            }
            Format::Json => {
                self.collected.insert(kind, report);
            }
        }
        Ok(())
    }

    /// Writes whatever is still pending and hands the writer back.
    pub(crate) fn finish(mut self) -> anyhow::Result<W> {
        match self.format {
            Format::Text => {
                if self.started {
                    writeln!(self.writer)?;
                }
            }
            Format::Json => {
                serde_json::to_writer_pretty(&mut self.writer, &self.collected)
                    .context("Failed to serialize reports")?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn write_text<W>(writer: &mut W, report: &Report) -> io::Result<()>
where
    W: Write,
{
    match report {
        Report::Mean(mean) => writeln!(writer, "Mean:\t\t{mean}"),
        Report::Median(median) => writeln!(writer, "Median:\t\t{median}"),
        Report::Range(range) => writeln!(writer, "Range:\t\t{range}"),
        Report::Occurrences(table) => {
            writeln!(writer, "Occurrences:")?;
            for entry in table.iter() {
                writeln!(writer, "{}:\t\t{} occurrences", entry.value, entry.count)?;
            }
            Ok(())
        }
        Report::Mode(modes) if modes.is_empty() => writeln!(writer, "No mode(s)"),
        Report::Mode(modes) => {
            writeln!(writer, "Mode(s):")?;
            for entry in modes {
                writeln!(writer, "{}:\t\t{} occurrences", entry.value, entry.count)?;
            }
            Ok(())
        }
        Report::RelativeToMean(counts) => write_threshold(writer, "mean", counts),
        Report::RelativeToMedian(counts) => write_threshold(writer, "median", counts),
        Report::Parity(counts) => writeln!(
            writer,
            "Number of odd values: {}\tNumber of even values: {}",
            counts.odd, counts.even
        ),
        Report::Sorted(values) => {
            for value in values {
                writeln!(writer, "{value}")?;
            }
            Ok(())
        }
    }
}

fn write_threshold<W>(writer: &mut W, name: &str, counts: &ThresholdCounts) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        writer,
        "Number of values < {name}: {} ({:.1}%)\tNumber of values > {name}: {} ({:.1}%)",
        counts.less,
        counts.less_percentage(),
        counts.greater,
        counts.greater_percentage(),
    )
}
