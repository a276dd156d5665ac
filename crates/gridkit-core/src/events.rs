//! Change notifications emitted by [`Table`](crate::Table).
//!
//! The table never calls back into a view. It appends events to a journal
//! which the presentation layer drains with
//! [`Table::take_events`](crate::Table::take_events) after each action and
//! uses to decide what to redraw.

use crate::selection::CellPos;
use crate::sort::SortState;

/// Events emitted by table mutations
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Cell values changed in place; shape is unchanged.
    CellsChanged(Vec<CellPos>),

    /// Rows or columns were inserted, deleted, renamed or moved.
    LayoutChanged,

    /// Row order or the sort label changed.
    SortChanged(SortState),

    /// Live data was replaced by the original snapshot.
    Reloaded,
}

impl TableEvent {
    /// True if the view needs a full relayout rather than a cell repaint
    pub fn needs_relayout(&self) -> bool {
        !matches!(self, TableEvent::CellsChanged(_))
    }
}
