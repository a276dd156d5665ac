//! Cell positions and selections

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// A cell's location as 0-based (row, column) indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl CellPos {
    /// Create a new position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// An arbitrary set of selected cells
///
/// Selections need not be rectangular. Iteration is row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: BTreeSet<CellPos>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a single cell
    pub fn cell(row: usize, col: usize) -> Self {
        let mut sel = Self::new();
        sel.insert(CellPos::new(row, col));
        sel
    }

    /// Select the rectangle `rows x cols`
    pub fn rect(rows: Range<usize>, cols: Range<usize>) -> Self {
        let mut sel = Self::new();
        for row in rows {
            for col in cols.clone() {
                sel.insert(CellPos::new(row, col));
            }
        }
        sel
    }

    /// Select an entire column of a table with `row_count` rows
    pub fn column(col: usize, row_count: usize) -> Self {
        Self::rect(0..row_count, col..col + 1)
    }

    /// Select an entire row of a table with `column_count` columns
    pub fn row(row: usize, column_count: usize) -> Self {
        Self::rect(row..row + 1, 0..column_count)
    }

    /// Add a cell
    pub fn insert(&mut self, pos: CellPos) -> bool {
        self.cells.insert(pos)
    }

    /// Add every cell of another selection
    pub fn extend(&mut self, other: &Selection) {
        self.cells.extend(other.cells.iter().copied());
    }

    /// Check if a cell is selected
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&CellPos::new(row, col))
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of selected cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over selected cells, row-major
    pub fn iter(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells.iter().copied()
    }

    /// Distinct selected rows, ascending
    pub fn rows(&self) -> Vec<usize> {
        let rows: BTreeSet<usize> = self.cells.iter().map(|p| p.row).collect();
        rows.into_iter().collect()
    }

    /// Distinct selected columns, ascending
    pub fn columns(&self) -> Vec<usize> {
        let cols: BTreeSet<usize> = self.cells.iter().map(|p| p.col).collect();
        cols.into_iter().collect()
    }

    /// Smallest selected row and column
    pub fn top_left(&self) -> Option<CellPos> {
        let row = self.cells.iter().map(|p| p.row).min()?;
        let col = self.cells.iter().map(|p| p.col).min()?;
        Some(CellPos::new(row, col))
    }

    /// Every row `0..row_count` of `col` is selected
    pub fn is_column_selected(&self, col: usize, row_count: usize) -> bool {
        row_count > 0 && (0..row_count).all(|row| self.contains(row, col))
    }

    /// Every column `0..column_count` of `row` is selected
    pub fn is_row_selected(&self, row: usize, column_count: usize) -> bool {
        column_count > 0 && (0..column_count).all(|col| self.contains(row, col))
    }

    /// Columns selected in their entirety, ascending
    pub fn whole_columns(&self, row_count: usize) -> Vec<usize> {
        self.columns()
            .into_iter()
            .filter(|&col| self.is_column_selected(col, row_count))
            .collect()
    }

    /// Rows selected in their entirety, ascending
    pub fn whole_rows(&self, column_count: usize) -> Vec<usize> {
        self.rows()
            .into_iter()
            .filter(|&row| self.is_row_selected(row, column_count))
            .collect()
    }
}

impl FromIterator<CellPos> for Selection {
    fn from_iter<I: IntoIterator<Item = CellPos>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(usize, usize)> for Selection {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        iter.into_iter().map(CellPos::from).collect()
    }
}
