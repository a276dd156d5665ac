//! Selection-to-clipboard codec
//!
//! [`encode`] turns a selection into delimited text; [`decode`] turns pasted
//! text into cell assignments. Both walk only visible rows and columns, so
//! pasting a copied block back under the same visibility reproduces it.

use gridkit_core::{CellPos, Selection, Table, Visibility};
use tracing::{debug, trace};

use crate::error::ClipboardResult;
use crate::options::{ClipboardOptions, HeaderPolicy};

/// A pasted value destined for one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAssignment {
    /// Target cell
    pub pos: CellPos,
    /// Raw pasted text (coerced when applied)
    pub value: String,
}

impl CellAssignment {
    /// Create a new assignment
    pub fn new(row: usize, col: usize, value: impl Into<String>) -> Self {
        Self {
            pos: CellPos::new(row, col),
            value: value.into(),
        }
    }
}

/// Values that stand for a missing number and are copied as empty
fn is_nan_text(text: &str) -> bool {
    text == "nan" || text == "NaN"
}

/// Encode the visible part of `selection` as delimited text.
///
/// The output is a dense grid over the distinct visible selected rows and
/// columns (ascending); cells inside it that are not selected are empty.
/// Positions outside the table are ignored. Depending on
/// [`ClipboardOptions::headers`], the column names of the copied columns
/// are prepended as a first line. An empty or fully hidden selection encodes
/// as the empty string.
pub fn encode<V: Visibility + ?Sized>(
    selection: &Selection,
    table: &Table,
    visibility: &V,
    options: &ClipboardOptions,
) -> ClipboardResult<String> {
    let rows: Vec<usize> = selection
        .rows()
        .into_iter()
        .filter(|&r| r < table.row_count() && !visibility.is_row_hidden(r))
        .collect();
    let cols: Vec<usize> = selection
        .columns()
        .into_iter()
        .filter(|&c| c < table.column_count() && !visibility.is_column_hidden(c))
        .collect();

    if rows.is_empty() || cols.is_empty() {
        return Ok(String::new());
    }

    let mut grid = vec![vec![String::new(); cols.len()]; rows.len()];
    for pos in selection.iter() {
        let (Ok(i), Ok(j)) = (rows.binary_search(&pos.row), cols.binary_search(&pos.col)) else {
            continue;
        };
        let text = table.display(pos.row, pos.col)?;
        if !is_nan_text(&text) {
            grid[i][j] = text;
        }
    }

    let with_header = match options.headers {
        HeaderPolicy::Always => true,
        HeaderPolicy::Never => false,
        HeaderPolicy::WholeColumns => cols
            .iter()
            .any(|&c| selection.is_column_selected(c, table.row_count())),
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .terminator(options.line_terminator.to_csv())
        .from_writer(Vec::new());

    if with_header {
        let header = cols
            .iter()
            .map(|&c| table.column_name(c))
            .collect::<Result<Vec<_>, _>>()?;
        writer.write_record(&header)?;
    }
    for record in &grid {
        writer.write_record(record)?;
    }

    let bytes = writer.into_inner()?;
    debug!(
        rows = rows.len(),
        cols = cols.len(),
        header = with_header,
        "encoded selection"
    );
    Ok(String::from_utf8(bytes)?)
}

/// Parse delimited text into rows of fields.
///
/// Accepts LF or CRLF line endings and rows of differing lengths. Every line
/// is a row: an empty line parses as a single empty field, so a copied
/// column with a blank cell pastes back onto the same rows.
pub fn parse(text: &str, options: &ClipboardOptions) -> ClipboardResult<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for line in split_lines(text, options.quote) {
        if line.is_empty() {
            rows.push(vec![String::new()]);
            continue;
        }
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes());
        match reader.records().next() {
            Some(record) => rows.push(record?.iter().map(str::to_string).collect()),
            None => rows.push(vec![String::new()]),
        }
    }
    Ok(rows)
}

/// Split text into records at line breaks outside quotes, dropping the
/// `\r` of CRLF endings. A final line break does not start a new line.
fn split_lines(text: &str, quote: u8) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (i, &b) in bytes.iter().enumerate() {
        if b == quote {
            quoted = !quoted;
        } else if b == b'\n' && !quoted {
            lines.push(text[start..i].strip_suffix('\r').unwrap_or(&text[start..i]));
            start = i + 1;
        }
    }
    if start < bytes.len() {
        lines.push(text[start..].strip_suffix('\r').unwrap_or(&text[start..]));
    }
    lines
}

/// Decode pasted tab-separated text into cell assignments.
///
/// Field `(i, j)` of the text lands on the `i`-th visible row and `j`-th
/// visible column counted from `top_left`, so hidden rows and columns are
/// skipped. Fields that would land past the last visible row or column are
/// dropped. A header line is not recognised; it is pasted like any other
/// line.
pub fn decode(
    text: &str,
    top_left: CellPos,
    table: &Table,
    visible_rows: &[usize],
    visible_columns: &[usize],
) -> ClipboardResult<Vec<CellAssignment>> {
    decode_with(
        text,
        top_left,
        table,
        visible_rows,
        visible_columns,
        &ClipboardOptions::default(),
    )
}

/// [`decode`] with explicit options
pub fn decode_with(
    text: &str,
    top_left: CellPos,
    table: &Table,
    visible_rows: &[usize],
    visible_columns: &[usize],
    options: &ClipboardOptions,
) -> ClipboardResult<Vec<CellAssignment>> {
    let parsed = parse(text, options)?;
    Ok(place(parsed, top_left, table, visible_rows, visible_columns))
}

/// Map already parsed rows onto the table the way [`decode`] does.
///
/// Fields without a target are left out of the result, so the number of
/// dropped fields is the parsed field count minus the result's length.
pub fn place(
    parsed: Vec<Vec<String>>,
    top_left: CellPos,
    table: &Table,
    visible_rows: &[usize],
    visible_columns: &[usize],
) -> Vec<CellAssignment> {
    // First visible index at or after the anchor
    let row_start = visible_rows.partition_point(|&r| r < top_left.row);
    let col_start = visible_columns.partition_point(|&c| c < top_left.col);

    let mut assignments = Vec::new();
    for (i, fields) in parsed.into_iter().enumerate() {
        let Some(&row) = visible_rows.get(row_start + i) else {
            trace!(line = i, "paste line past last visible row, dropped");
            break;
        };
        if row >= table.row_count() {
            trace!(row, "paste target row out of range, dropped");
            continue;
        }
        for (j, value) in fields.into_iter().enumerate() {
            let Some(&col) = visible_columns.get(col_start + j) else {
                trace!(row, field = j, "paste field past last visible column, dropped");
                break;
            };
            if col >= table.column_count() {
                continue;
            }
            assignments.push(CellAssignment::new(row, col, value));
        }
    }
    assignments
}
