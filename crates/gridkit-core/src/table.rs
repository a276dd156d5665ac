//! Table type

use ahash::AHashSet;
use tracing::debug;

use crate::column::{Column, MoveDirection};
use crate::error::{Error, Result};
use crate::events::TableEvent;
use crate::row::Row;
use crate::selection::{CellPos, Selection};
use crate::sort::SortState;
use crate::value::CellValue;

/// Immutable copy of the data a table was built from
#[derive(Debug, Clone)]
struct Snapshot {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// What [`Table::delete_selection`] removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was selected
    Nothing,
    /// Whole columns were deleted (names)
    Columns(Vec<String>),
    /// Whole rows were deleted (indices before deletion)
    Rows(Vec<usize>),
    /// Individual cells were cleared
    Cells(usize),
}

/// An in-memory table: ordered, uniquely named columns over positional rows
///
/// The table keeps a snapshot of its initial contents which
/// [`reload`](Table::reload) restores. Every mutation appends a
/// [`TableEvent`] to a journal drained with [`take_events`](Table::take_events).
///
/// ```rust
/// use gridkit_core::{CellValue, Table};
///
/// let mut table = Table::new(
///     vec!["A".into(), "B".into()],
///     vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]],
/// )
/// .unwrap();
///
/// table.insert_column(1, "X", CellValue::Empty).unwrap();
/// assert_eq!(table.column_names(), vec!["A", "X", "B"]);
///
/// table.set_cell(0, 1, "2.50").unwrap();
/// assert_eq!(table.display(0, 1).unwrap(), "2.5");
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Row>,
    pub(crate) sort: SortState,
    pub(crate) events: Vec<TableEvent>,
    original: Snapshot,
}

impl Table {
    /// Create a table from column names and row-major values.
    ///
    /// Short rows are padded with empty cells. Fails with
    /// [`Error::DuplicateColumn`] on repeated names and
    /// [`Error::InvalidArgument`] if a row is wider than the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }

        let width = columns.len();
        let mut padded = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(Error::invalid(format!(
                    "row {} has {} values but the table has {} columns",
                    i,
                    row.len(),
                    width
                )));
            }
            row.resize(width, CellValue::Empty);
            padded.push(row);
        }

        let original = Snapshot {
            columns,
            rows: padded,
        };
        let mut table = Self {
            columns: Vec::new(),
            rows: Vec::new(),
            sort: SortState::Unsorted,
            events: Vec::new(),
            original,
        };
        table.load_snapshot();
        Ok(table)
    }

    /// Create a table with the given columns and no rows
    pub fn with_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(columns.into_iter().map(Into::into).collect(), Vec::new())
    }

    fn load_snapshot(&mut self) {
        self.columns = self.original.columns.clone();
        self.rows = self
            .original
            .rows
            .iter()
            .enumerate()
            .map(|(i, cells)| Row::new(i, cells.clone()))
            .collect();
    }

    // === Shape ===

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over columns, left to right
    pub fn columns(&self) -> impl Iterator<Item = Column<'_>> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
    }

    /// Column names, left to right
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(String::as_str).collect()
    }

    /// Name of the column at `col`
    pub fn column_name(&self, col: usize) -> Result<&str> {
        self.columns
            .get(col)
            .map(String::as_str)
            .ok_or(Error::ColumnOutOfRange(col, self.columns.len()))
    }

    /// Position of the named column
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Check if a column with this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Get a row by index
    pub fn row(&self, row: usize) -> Result<&Row> {
        self.rows
            .get(row)
            .ok_or(Error::RowOutOfRange(row, self.rows.len()))
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    // === Cell Access ===

    /// Get a cell value by row and column indices
    pub fn get_cell(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.validate_cell_position(row, col)?;
        Ok(&self.rows[row].cells[col])
    }

    /// Get a cell's display text
    pub fn display(&self, row: usize, col: usize) -> Result<String> {
        self.get_cell(row, col).map(ToString::to_string)
    }

    /// Set a cell from raw user input.
    ///
    /// Numeric input is stored as a float, anything else as text; see
    /// [`CellValue::coerce`]. Only fails on a bad position.
    pub fn set_cell(&mut self, row: usize, col: usize, raw: &str) -> Result<()> {
        self.set_value(row, col, CellValue::coerce(raw))
    }

    /// Set a cell to an already typed value
    pub fn set_value<V: Into<CellValue>>(&mut self, row: usize, col: usize, value: V) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.rows[row].cells[col] = value.into();
        self.events
            .push(TableEvent::CellsChanged(vec![CellPos::new(row, col)]));
        Ok(())
    }

    // === Column Operations ===

    /// Rename a column in place.
    ///
    /// Fails with [`Error::ColumnNotFound`] if `old` is absent and with
    /// [`Error::DuplicateColumn`] if another column is already called `new`.
    pub fn rename_column(&mut self, old: &str, new: &str) -> Result<()> {
        let idx = self.column_index(old)?;
        if old == new {
            return Ok(());
        }
        if self.has_column(new) {
            return Err(Error::DuplicateColumn(new.to_string()));
        }
        debug!(old, new, "renaming column");
        self.columns[idx] = new.to_string();
        self.sort.rename(old, new);
        self.events.push(TableEvent::LayoutChanged);
        Ok(())
    }

    /// Insert a column at `position`, filled with `default`.
    ///
    /// Columns at or after `position` shift right.
    pub fn insert_column<V: Into<CellValue>>(
        &mut self,
        position: usize,
        name: &str,
        default: V,
    ) -> Result<()> {
        if position > self.columns.len() {
            return Err(Error::ColumnOutOfRange(position, self.columns.len()));
        }
        if self.has_column(name) {
            return Err(Error::DuplicateColumn(name.to_string()));
        }
        debug!(position, name, "inserting column");
        let default = default.into();
        self.columns.insert(position, name.to_string());
        for row in &mut self.rows {
            row.cells.insert(position, default.clone());
        }
        self.structure_changed();
        Ok(())
    }

    /// Delete the named columns.
    ///
    /// All-or-nothing: if any name is missing nothing is deleted. An empty
    /// set is a no-op.
    pub fn delete_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        let mut doomed = AHashSet::with_capacity(names.len());
        for name in names {
            doomed.insert(self.column_index(name.as_ref())?);
        }
        debug!(count = doomed.len(), "deleting columns");

        let mut idx = 0;
        self.columns.retain(|_| {
            let keep = !doomed.contains(&idx);
            idx += 1;
            keep
        });
        for row in &mut self.rows {
            let mut idx = 0;
            row.cells.retain(|_| {
                let keep = !doomed.contains(&idx);
                idx += 1;
                keep
            });
        }
        self.structure_changed();
        Ok(())
    }

    /// Move a column one step left or right.
    ///
    /// Returns `Ok(false)` without changing anything if the column is
    /// already at that edge. The sort state is kept.
    pub fn move_column(&mut self, name: &str, direction: MoveDirection) -> Result<bool> {
        let from = self.column_index(name)?;
        let Some(to) = direction.target(from, self.columns.len()) else {
            return Ok(false);
        };
        debug!(name, from, to, "moving column");
        self.columns.swap(from, to);
        for row in &mut self.rows {
            row.cells.swap(from, to);
        }
        self.events.push(TableEvent::LayoutChanged);
        Ok(true)
    }

    // === Row Operations ===

    /// Insert `count` blank rows immediately after row `after_index`
    pub fn insert_rows(&mut self, after_index: usize, count: usize) -> Result<()> {
        if count == 0 {
            return Err(Error::invalid("row count must be at least 1"));
        }
        if after_index >= self.rows.len() {
            return Err(Error::RowOutOfRange(after_index, self.rows.len()));
        }
        self.splice_blank_rows(after_index + 1, count);
        Ok(())
    }

    /// Append `count` blank rows at the bottom
    pub fn push_rows(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(Error::invalid("row count must be at least 1"));
        }
        self.splice_blank_rows(self.rows.len(), count);
        Ok(())
    }

    fn splice_blank_rows(&mut self, at: usize, count: usize) {
        debug!(at, count, "inserting rows");
        let width = self.columns.len();
        self.rows
            .splice(at..at, (0..count).map(|_| Row::blank(0, width)));
        self.structure_changed();
    }

    /// Delete rows by position; remaining rows are re-indexed from 0.
    ///
    /// Fails with [`Error::RowOutOfRange`] (deleting nothing) if any index
    /// is invalid. Duplicate indices are ignored.
    pub fn delete_rows(&mut self, indices: &[usize]) -> Result<()> {
        if indices.is_empty() {
            return Ok(());
        }
        let count = self.rows.len();
        if let Some(&bad) = indices.iter().find(|&&i| i >= count) {
            return Err(Error::RowOutOfRange(bad, count));
        }
        let doomed: AHashSet<usize> = indices.iter().copied().collect();
        debug!(count = doomed.len(), "deleting rows");

        let mut idx = 0;
        self.rows.retain(|_| {
            let keep = !doomed.contains(&idx);
            idx += 1;
            keep
        });
        self.structure_changed();
        Ok(())
    }

    /// Delete whatever a selection covers.
    ///
    /// If any column is selected in its entirety, those columns are deleted.
    /// Otherwise, if any row is selected in its entirety, those rows are
    /// deleted. Otherwise every selected cell is cleared. Positions outside
    /// the table are ignored.
    pub fn delete_selection(&mut self, selection: &Selection) -> Result<DeleteOutcome> {
        if selection.is_empty() {
            return Ok(DeleteOutcome::Nothing);
        }

        let whole_columns: Vec<usize> = selection
            .whole_columns(self.rows.len())
            .into_iter()
            .filter(|&c| c < self.columns.len())
            .collect();
        if !whole_columns.is_empty() {
            let names: Vec<String> = whole_columns
                .iter()
                .map(|&c| self.columns[c].clone())
                .collect();
            self.delete_columns(&names)?;
            return Ok(DeleteOutcome::Columns(names));
        }

        let whole_rows: Vec<usize> = selection
            .whole_rows(self.columns.len())
            .into_iter()
            .filter(|&r| r < self.rows.len())
            .collect();
        if !whole_rows.is_empty() {
            self.delete_rows(&whole_rows)?;
            return Ok(DeleteOutcome::Rows(whole_rows));
        }

        let mut cleared = Vec::new();
        for pos in selection.iter() {
            if let Some(cell) = self
                .rows
                .get_mut(pos.row)
                .and_then(|r| r.cells.get_mut(pos.col))
            {
                *cell = CellValue::Empty;
                cleared.push(pos);
            }
        }
        let count = cleared.len();
        if count > 0 {
            self.events.push(TableEvent::CellsChanged(cleared));
        }
        Ok(DeleteOutcome::Cells(count))
    }

    // === Snapshot ===

    /// Discard all edits and restore the data the table was built from
    pub fn reload(&mut self) {
        debug!("reloading original data");
        self.load_snapshot();
        self.sort = SortState::Unsorted;
        self.events.push(TableEvent::Reloaded);
    }

    // === Events ===

    /// Drain pending change events
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are undrained change events
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    // === Internal ===

    /// Rows or columns were added or removed: the current order becomes the
    /// natural order and the sort label is cleared. Data is not re-sorted.
    fn structure_changed(&mut self) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.label = i;
        }
        if !self.sort.is_unsorted() {
            self.sort = SortState::Unsorted;
            self.events.push(TableEvent::SortChanged(SortState::Unsorted));
        }
        self.events.push(TableEvent::LayoutChanged);
    }

    fn validate_cell_position(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows.len() {
            return Err(Error::RowOutOfRange(row, self.rows.len()));
        }
        if col >= self.columns.len() {
            return Err(Error::ColumnOutOfRange(col, self.columns.len()));
        }
        Ok(())
    }
}
