// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of derived labels and duplicate reports.

use crate::error::ApiResult;
use bin_labels_domain::{DuplicateReport, LabelRow};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use tracing::debug;

/// Separator placed between raw values in a single duplicate report cell.
const RAW_VALUE_SEPARATOR: &str = "; ";

/// Prefix of shelf column headers in the wide layout.
const SHELF_COLUMN_PREFIX: &str = "Shelf_";

/// Header of the long layout.
const LONG_HEADER: [&str; 6] = [
    "group",
    "bay_input",
    "normalized_bay",
    "shelf",
    "position",
    "bin_label",
];

/// Header of the duplicate report.
const DUPLICATE_HEADER: [&str; 6] = [
    "kind",
    "scope",
    "normalized_id",
    "first_group",
    "repeat_group",
    "raw_values",
];

/// Creates a CSV writer that leaves header lines to the caller, so empty
/// exports still carry their header.
fn headerless_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer)
}

/// The shape of a label export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportLayout {
    /// One line per label row.
    #[default]
    Long,
    /// One line per bay and bin position, one column per shelf.
    Wide,
}

/// A long-layout CSV line.
#[derive(Debug, Serialize)]
struct LongRecord<'a> {
    group: &'a str,
    bay_input: &'a str,
    normalized_bay: &'a str,
    shelf: &'a str,
    position: usize,
    bin_label: &'a str,
}

impl<'a> From<&'a LabelRow> for LongRecord<'a> {
    fn from(row: &'a LabelRow) -> Self {
        Self {
            group: &row.group_name,
            bay_input: &row.bay_input,
            normalized_bay: &row.normalized_bay,
            shelf: &row.shelf,
            position: row.position_index,
            bin_label: &row.bin_label,
        }
    }
}

/// A duplicate report CSV line.
#[derive(Debug, Serialize)]
struct DuplicateRecord<'a> {
    kind: &'a str,
    scope: &'a str,
    normalized_id: &'a str,
    first_group: &'a str,
    repeat_group: &'a str,
    raw_values: String,
}

/// Writes rows in the long layout.
///
/// The header is `group,bay_input,normalized_bay,shelf,position,bin_label`.
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn write_long_csv<W: Write>(rows: &[LabelRow], writer: W) -> ApiResult<()> {
    let mut csv_writer: csv::Writer<W> = headerless_writer(writer);
    csv_writer.write_record(LONG_HEADER)?;
    for row in rows {
        csv_writer.serialize(LongRecord::from(row))?;
    }
    csv_writer.flush()?;
    debug!(rows = rows.len(), "Wrote long label CSV");
    Ok(())
}

/// A pivoted view of the labels: one line per bay and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideTable {
    /// Column headers.
    pub header: Vec<String>,
    /// Cell values, one inner vector per line.
    pub lines: Vec<Vec<String>>,
}

/// Pivots label rows into the wide layout.
///
/// Shelf columns are the union of every shelf seen, in first-seen order.
/// Each bay contributes as many lines as its fullest shelf has bins; cells
/// past a shelf's bin count, or for shelves the bay's group lacks, are
/// empty.
#[must_use]
pub fn wide_table(rows: &[LabelRow]) -> WideTable {
    let mut shelves: Vec<&str> = Vec::new();
    for row in rows {
        if !shelves.contains(&row.shelf.as_str()) {
            shelves.push(&row.shelf);
        }
    }

    let mut header: Vec<String> = vec![String::from("group"), String::from("bay_input")];
    header.extend(
        shelves
            .iter()
            .map(|shelf| format!("{SHELF_COLUMN_PREFIX}{shelf}")),
    );

    let mut lines: Vec<Vec<String>> = Vec::new();

    let same_bay = |a: &LabelRow, b: &LabelRow| -> bool {
        a.group_index == b.group_index && a.bay_index == b.bay_index
    };

    for bay_rows in rows.chunk_by(same_bay) {
        let Some(first) = bay_rows.first() else {
            continue;
        };

        let cells: HashMap<(&str, usize), &str> = bay_rows
            .iter()
            .map(|row| ((row.shelf.as_str(), row.position_index), row.bin_label.as_str()))
            .collect();
        let depth: usize = bay_rows
            .iter()
            .map(|row| row.position_index + 1)
            .max()
            .unwrap_or_default();

        for position in 0..depth {
            let mut line: Vec<String> = Vec::with_capacity(header.len());
            line.push(first.group_name.clone());
            line.push(first.bay_input.clone());
            line.extend(shelves.iter().map(|shelf| {
                cells
                    .get(&(*shelf, position))
                    .map_or_else(String::new, |label| (*label).to_string())
            }));
            lines.push(line);
        }
    }

    WideTable { header, lines }
}

/// Writes rows in the wide layout.
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn write_wide_csv<W: Write>(rows: &[LabelRow], writer: W) -> ApiResult<()> {
    let table: WideTable = wide_table(rows);
    let mut csv_writer: csv::Writer<W> = headerless_writer(writer);
    csv_writer.write_record(&table.header)?;
    for line in &table.lines {
        csv_writer.write_record(line)?;
    }
    csv_writer.flush()?;
    debug!(lines = table.lines.len(), "Wrote wide label CSV");
    Ok(())
}

/// Writes rows in the requested layout.
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn write_labels<W: Write>(
    rows: &[LabelRow],
    layout: ExportLayout,
    writer: W,
) -> ApiResult<()> {
    match layout {
        ExportLayout::Long => write_long_csv(rows, writer),
        ExportLayout::Wide => write_wide_csv(rows, writer),
    }
}

fn duplicate_records<'a>(
    kind: &'a str,
    report: &'a DuplicateReport,
) -> Vec<DuplicateRecord<'a>> {
    let within = report.within_group.iter().map(move |dup| {
        let raw_values: Vec<&str> = std::iter::once(dup.first.raw.as_str())
            .chain(dup.repeats.iter().map(String::as_str))
            .collect();
        DuplicateRecord {
            kind,
            scope: "within",
            normalized_id: &dup.normalized,
            first_group: &dup.first.group_name,
            repeat_group: &dup.first.group_name,
            raw_values: raw_values.join(RAW_VALUE_SEPARATOR),
        }
    });
    let across = report.across_groups.iter().map(move |dup| DuplicateRecord {
        kind,
        scope: "across",
        normalized_id: &dup.normalized,
        first_group: &dup.first.group_name,
        repeat_group: &dup.repeat.group_name,
        raw_values: [dup.first.raw.as_str(), dup.repeat.raw.as_str()].join(RAW_VALUE_SEPARATOR),
    });
    within.chain(across).collect()
}

/// Writes bay and bin duplicate reports as one CSV.
///
/// The header is
/// `kind,scope,normalized_id,first_group,repeat_group,raw_values`, where
/// `kind` is `bay` or `bin` and `scope` is `within` or `across`.
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn write_duplicates_csv<W: Write>(
    bay_duplicates: &DuplicateReport,
    bin_duplicates: &DuplicateReport,
    writer: W,
) -> ApiResult<()> {
    let mut csv_writer: csv::Writer<W> = headerless_writer(writer);
    let records: Vec<DuplicateRecord<'_>> = duplicate_records("bay", bay_duplicates)
        .into_iter()
        .chain(duplicate_records("bin", bin_duplicates))
        .collect();

    csv_writer.write_record(DUPLICATE_HEADER)?;
    for record in &records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
