//! Row and column visibility
//!
//! Hiding is a presentation concern; the table itself has no notion of it.
//! Copy and paste consult a [`Visibility`] so that hidden rows and columns
//! are skipped on both sides.

use std::collections::BTreeSet;

use crate::table::Table;

/// Answers whether a row or column is currently hidden
pub trait Visibility {
    /// Check if row `row` is hidden
    fn is_row_hidden(&self, _row: usize) -> bool {
        false
    }

    /// Check if column `col` is hidden
    fn is_column_hidden(&self, _col: usize) -> bool {
        false
    }

    /// Indices of visible rows in `table`, ascending
    fn visible_rows(&self, table: &Table) -> Vec<usize> {
        (0..table.row_count())
            .filter(|&r| !self.is_row_hidden(r))
            .collect()
    }

    /// Indices of visible columns in `table`, ascending
    fn visible_columns(&self, table: &Table) -> Vec<usize> {
        (0..table.column_count())
            .filter(|&c| !self.is_column_hidden(c))
            .collect()
    }
}

/// Everything is visible
#[derive(Debug, Clone, Copy, Default)]
pub struct AllVisible;

impl Visibility for AllVisible {}

/// Explicit sets of hidden rows and columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hidden {
    /// Hidden row indices
    pub rows: BTreeSet<usize>,
    /// Hidden column indices
    pub columns: BTreeSet<usize>,
}

impl Hidden {
    /// Nothing hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide or show a row
    pub fn set_row_hidden(&mut self, row: usize, hidden: bool) {
        if hidden {
            self.rows.insert(row);
        } else {
            self.rows.remove(&row);
        }
    }

    /// Hide or show a column
    pub fn set_column_hidden(&mut self, col: usize, hidden: bool) {
        if hidden {
            self.columns.insert(col);
        } else {
            self.columns.remove(&col);
        }
    }
}

impl Visibility for Hidden {
    fn is_row_hidden(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    fn is_column_hidden(&self, col: usize) -> bool {
        self.columns.contains(&col)
    }
}

impl<V: Visibility + ?Sized> Visibility for &V {
    fn is_row_hidden(&self, row: usize) -> bool {
        (**self).is_row_hidden(row)
    }

    fn is_column_hidden(&self, col: usize) -> bool {
        (**self).is_column_hidden(col)
    }
}
