//! Column types

use std::fmt;

/// A named column at a position in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    /// Column name (unique within the table)
    pub name: &'a str,
    /// Column index (0-based, left to right)
    pub position: usize,
}

impl<'a> Column<'a> {
    /// Create a new column view
    pub fn new(name: &'a str, position: usize) -> Self {
        Self { name, position }
    }
}

impl fmt::Display for Column<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Direction for [`Table::move_column`](crate::Table::move_column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveDirection {
    /// Towards position 0
    Left,
    /// Towards the last position
    Right,
}

impl MoveDirection {
    /// Target position for a column currently at `position`, if it stays
    /// inside `0..count`
    pub fn target(self, position: usize, count: usize) -> Option<usize> {
        match self {
            MoveDirection::Left => position.checked_sub(1),
            MoveDirection::Right => Some(position + 1).filter(|&p| p < count),
        }
    }
}
