//! Order-test table rendering
//!
//! Maps a page of records to rows of a fixed 10-column table. Rendering is
//! pure: the same records always produce the same output, and a missing
//! field is an empty cell.

use crate::domain::OrderTestRecord;
use std::fmt::Write;

/// Number of table columns
pub const COLUMN_COUNT: usize = 10;

/// Table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    OrderTestId,
    PatientId,
    PatientAgeRange,
    PatientRegion,
    OrderTestCategory,
    OrderTestType,
    SampleCollectedDate,
    ResultReportDate,
    OrderTestResult,
    OrderTestCreatedAt,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::OrderTestId,
        Column::PatientId,
        Column::PatientAgeRange,
        Column::PatientRegion,
        Column::OrderTestCategory,
        Column::OrderTestType,
        Column::SampleCollectedDate,
        Column::ResultReportDate,
        Column::OrderTestResult,
        Column::OrderTestCreatedAt,
    ];

    /// Header label
    pub fn header(&self) -> &'static str {
        match self {
            Column::OrderTestId => "Order Test ID",
            Column::PatientId => "Patient ID",
            Column::PatientAgeRange => "Patient Age Range",
            Column::PatientRegion => "Patient Region",
            Column::OrderTestCategory => "Order Test Category",
            Column::OrderTestType => "Order Test Type",
            Column::SampleCollectedDate => "Sample Collected Date",
            Column::ResultReportDate => "Result Report Date",
            Column::OrderTestResult => "Order Test Result",
            Column::OrderTestCreatedAt => "Order Test Created At",
        }
    }

    /// Cell value for `record`, if the field is present
    pub fn value<'a>(&self, record: &'a OrderTestRecord) -> Option<&'a str> {
        match self {
            Column::OrderTestId => record.order_test_id.as_ref().map(|id| id.as_str()),
            Column::PatientId => record.patient_id.as_ref().map(|id| id.as_str()),
            Column::PatientAgeRange => record.patient_age_range.as_deref(),
            Column::PatientRegion => record.patient_region.as_deref(),
            Column::OrderTestCategory => record.order_test_category.as_deref(),
            Column::OrderTestType => record.order_test_type.as_deref(),
            Column::SampleCollectedDate => record.sample_collected_date.as_deref(),
            Column::ResultReportDate => record.result_report_date.as_deref(),
            Column::OrderTestResult => record.order_test_result.as_deref(),
            Column::OrderTestCreatedAt => record.order_test_created_at.as_deref(),
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Stable row key
    pub key: String,

    /// Cell text in [`Column::ALL`] order
    pub cells: [String; COLUMN_COUNT],
}

/// Renders records into the order-test table
pub struct TableRenderer;

impl TableRenderer {
    /// Builds rows for `records`
    ///
    /// `first_index` is the absolute position of `records[0]` in the full
    /// record set; it is used for the row key of records without an ID.
    pub fn rows(records: &[OrderTestRecord], first_index: usize) -> Vec<TableRow> {
        records
            .iter()
            .enumerate()
            .map(|(offset, record)| TableRow {
                key: record.row_key(first_index + offset),
                cells: Column::ALL
                    .map(|column| column.value(record).unwrap_or_default().to_string()),
            })
            .collect()
    }

    /// Plain-text table with aligned columns
    pub fn render_text(rows: &[TableRow]) -> String {
        let mut widths = Column::ALL.map(|column| column.header().chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let headers = Column::ALL.map(|column| column.header().to_string());
        push_text_line(&mut out, &headers, &widths);

        let total_width = widths.iter().sum::<usize>() + 2 * (COLUMN_COUNT - 1);
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        for row in rows {
            push_text_line(&mut out, &row.cells, &widths);
        }
        out
    }

    /// HTML `<table>` element
    pub fn render_html(rows: &[TableRow]) -> String {
        let mut out = String::from("<table>\n  <thead>\n    <tr>\n");
        for column in Column::ALL {
            let _ = writeln!(out, "      <th>{}</th>", escape_html(column.header()));
        }
        out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

        for row in rows {
            let _ = writeln!(out, "    <tr data-key=\"{}\">", escape_html(&row.key));
            for cell in &row.cells {
                let _ = writeln!(out, "      <td>{}</td>", escape_html(cell));
            }
            out.push_str("    </tr>\n");
        }

        out.push_str("  </tbody>\n</table>\n");
        out
    }
}

fn push_text_line(
    out: &mut String,
    cells: &[String; COLUMN_COUNT],
    widths: &[usize; COLUMN_COUNT],
) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Escapes text for HTML element content and attribute values
pub(crate) fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
