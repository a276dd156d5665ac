//! # gridkit
//!
//! A spreadsheet-like data grid core.
//!
//! gridkit holds the data behind a grid widget and implements everything the
//! widget's menus and shortcuts do to it, independent of any GUI toolkit:
//!
//! - An in-memory table with ordered, uniquely named columns
//! - Row and column editing (insert, delete, rename, move)
//! - A tri-state column sort (ascending, descending, back to natural order)
//! - Tab-separated copy and paste that skips hidden rows and columns
//! - Loading and saving CSV/TSV files
//!
//! ## Example
//!
//! ```rust
//! use gridkit::prelude::*;
//!
//! let table = Table::new(
//!     vec!["A".into(), "B".into()],
//!     vec![vec![3.into(), "x".into()], vec![1.into(), "y".into()]],
//! )
//! .unwrap();
//! let mut grid = Grid::detached(table);
//!
//! // Copy column B (with its header) and paste it over column A
//! grid.copy(&Selection::column(1, 2)).unwrap();
//! grid.paste(&Selection::cell(0, 0)).unwrap();
//! assert_eq!(grid.table().display(0, 0).unwrap(), "B");
//! assert_eq!(grid.table().display(1, 0).unwrap(), "x");
//!
//! // Header double-click
//! grid.toggle_sort(1).unwrap();
//! assert_eq!(grid.sort_indicator(1), SortIndicator::Ascending);
//! ```

pub mod grid;
pub mod prelude;

pub use grid::{
    Clipboard, Grid, GridError, GridResult, HeaderAction, MemoryClipboard, PasteReport, Presenter,
};

// Re-export core types
pub use gridkit_core::{
    compare_values, format_float, AllVisible, CellPos, CellValue, Column, DeleteOutcome, Error,
    Hidden, MoveDirection, Result, Row, Selection, SortDirection, SortIndicator, SortState,
    Table, TableEvent, Visibility, MAX_DISPLAY_DECIMALS,
};

// Re-export clipboard types
pub use gridkit_clipboard::{
    decode, decode_with, encode, parse, place, CellAssignment, ClipboardError, ClipboardOptions,
    ClipboardResult, DelimitedReader, DelimitedWriter, HeaderPolicy, LineTerminator, ReadOptions,
    WriteOptions,
};
