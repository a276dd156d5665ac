//! Column sorting
//!
//! A table carries a single [`SortState`]: which column was sorted last and
//! in which direction. Toggling a column cycles
//! `Unsorted -> Ascending -> Descending -> Unsorted`, where the return to
//! `Unsorted` restores the natural row order instead of sorting by value.
//!
//! Ordering rules, for both directions:
//! - numbers (ints and floats) compare numerically and come before text
//! - text compares lexicographically
//! - missing values (empty cells, NaN) always sort last
//!
//! All sorts are stable, so equal keys keep their current relative order.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::Result;
use crate::events::TableEvent;
use crate::table::Table;
use crate::value::CellValue;

/// Current sort state of a table
///
/// Keyed by column name so that moving a column does not invalidate it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortState {
    /// Rows are in their natural order
    #[default]
    Unsorted,
    /// Sorted ascending by the named column
    Ascending(String),
    /// Sorted descending by the named column
    Descending(String),
}

impl SortState {
    /// The sorted column, if any
    pub fn column(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(c) | SortState::Descending(c) => Some(c),
        }
    }

    /// Check if rows are in their natural order
    pub fn is_unsorted(&self) -> bool {
        matches!(self, SortState::Unsorted)
    }

    /// Header indicator for the named column
    pub fn indicator_for(&self, column: &str) -> SortIndicator {
        match self {
            SortState::Ascending(c) if c == column => SortIndicator::Ascending,
            SortState::Descending(c) if c == column => SortIndicator::Descending,
            _ => SortIndicator::None,
        }
    }

    /// The state a toggle on `column` moves to
    pub fn toggled(&self, column: &str) -> SortState {
        match self {
            SortState::Ascending(c) if c == column => SortState::Descending(c.clone()),
            SortState::Descending(c) if c == column => SortState::Unsorted,
            _ => SortState::Ascending(column.to_string()),
        }
    }

    pub(crate) fn rename(&mut self, old: &str, new: &str) {
        match self {
            SortState::Ascending(c) | SortState::Descending(c) if c == old => {
                *c = new.to_string();
            }
            _ => {}
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Ascending for `true`
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// What a column header should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    #[default]
    None,
    Ascending,
    Descending,
}

fn is_missing(value: &CellValue) -> bool {
    match value {
        CellValue::Empty => true,
        CellValue::Float(n) => n.is_nan(),
        _ => false,
    }
}

/// Ascending order between two present (non-missing) values
fn compare_present(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .as_text()
            .unwrap_or_default()
            .cmp(b.as_text().unwrap_or_default()),
    }
}

/// Compare two cell values for sorting in `direction`.
///
/// Missing values compare greater than everything in both directions.
pub fn compare_values(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (is_missing(a), is_missing(b)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = compare_present(a, b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

impl Table {
    /// Current sort state
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Header indicator for the column at `col`
    pub fn sort_indicator(&self, col: usize) -> SortIndicator {
        match self.column_name(col) {
            Ok(name) => self.sort.indicator_for(name),
            Err(_) => SortIndicator::None,
        }
    }

    /// Advance the sort cycle on column `col`.
    ///
    /// From any state not keyed on this column, sorts ascending. From
    /// ascending, sorts descending. From descending, restores the natural
    /// row order. Returns the new state.
    pub fn toggle(&mut self, col: usize) -> Result<SortState> {
        let name = self.column_name(col)?.to_string();
        let next = self.sort.toggled(&name);
        match &next {
            SortState::Ascending(_) => self.sort_rows(col, SortDirection::Ascending),
            SortState::Descending(_) => self.sort_rows(col, SortDirection::Descending),
            SortState::Unsorted => self.restore_rows(),
        }
        self.set_sort_state(next.clone());
        Ok(next)
    }

    /// Sort by column `col` in the given direction without cycling
    pub fn sort_by(&mut self, col: usize, ascending: bool) -> Result<()> {
        let name = self.column_name(col)?.to_string();
        let direction = SortDirection::from_ascending(ascending);
        self.sort_rows(col, direction);
        self.set_sort_state(match direction {
            SortDirection::Ascending => SortState::Ascending(name),
            SortDirection::Descending => SortState::Descending(name),
        });
        Ok(())
    }

    /// Put rows back in their natural order and clear the sort state
    pub fn restore_order(&mut self) {
        self.restore_rows();
        self.set_sort_state(SortState::Unsorted);
    }

    fn sort_rows(&mut self, col: usize, direction: SortDirection) {
        debug!(col, ?direction, rows = self.rows.len(), "sorting rows");
        self.rows
            .sort_by(|a, b| compare_values(&a.cells[col], &b.cells[col], direction));
    }

    fn restore_rows(&mut self) {
        debug!(rows = self.rows.len(), "restoring natural row order");
        self.rows.sort_by_key(|row| row.label);
    }

    fn set_sort_state(&mut self, state: SortState) {
        self.sort = state.clone();
        self.events.push(TableEvent::SortChanged(state));
    }
}
