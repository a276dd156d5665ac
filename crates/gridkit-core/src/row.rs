//! Row types

use crate::value::CellValue;

/// A row of cells
///
/// Rows have no identity beyond their position. The `label` remembers the
/// position the row had when the table was last in its natural order, so an
/// unsorted order can be restored after a sort.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub(crate) label: usize,
    pub(crate) cells: Vec<CellValue>,
}

impl Row {
    pub(crate) fn new(label: usize, cells: Vec<CellValue>) -> Self {
        Self { label, cells }
    }

    /// A row of `width` empty cells
    pub(crate) fn blank(label: usize, width: usize) -> Self {
        Self::new(label, vec![CellValue::Empty; width])
    }

    /// Get a cell by column index
    pub fn cell(&self, col: usize) -> Option<&CellValue> {
        self.cells.get(col)
    }

    /// All cells, left to right
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if every cell is empty
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_empty)
    }
}
