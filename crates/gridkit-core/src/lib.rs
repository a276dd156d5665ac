//! # gridkit-core
//!
//! Core data structures for the gridkit data grid.
//!
//! This crate provides the fundamental types used throughout gridkit:
//! - [`CellValue`] - A typed cell value (int, float, text or empty)
//! - [`Table`] - Ordered, uniquely named columns over positional rows
//! - [`SortState`] - The tri-state column sort carried by a table
//! - [`Selection`] and [`CellPos`] - Arbitrary sets of selected cells
//! - [`TableEvent`] - Change notifications for a presentation layer
//! - [`Visibility`] - Hidden rows and columns, as seen by copy and paste
//!
//! ## Example
//!
//! ```rust
//! use gridkit_core::{MoveDirection, SortState, Table};
//!
//! let mut table = Table::new(
//!     vec!["name".into(), "score".into()],
//!     vec![
//!         vec!["ada".into(), 3.into()],
//!         vec!["bob".into(), 1.into()],
//!     ],
//! )
//! .unwrap();
//!
//! // Header double-click cycles ascending, descending, unsorted
//! table.toggle(1).unwrap();
//! assert_eq!(table.sort_state(), &SortState::Ascending("score".into()));
//! assert_eq!(table.display(0, 0).unwrap(), "bob");
//!
//! table.move_column("score", MoveDirection::Left).unwrap();
//! assert_eq!(table.column_names(), vec!["score", "name"]);
//! ```

pub mod column;
pub mod error;
pub mod events;
pub mod row;
pub mod selection;
pub mod sort;
pub mod table;
pub mod value;
pub mod visibility;

// Re-exports for convenience
pub use column::{Column, MoveDirection};
pub use error::{Error, Result};
pub use events::TableEvent;
pub use row::Row;
pub use selection::{CellPos, Selection};
pub use sort::{compare_values, SortDirection, SortIndicator, SortState};
pub use table::{DeleteOutcome, Table};
pub use value::{format_float, CellValue, MAX_DISPLAY_DECIMALS};
pub use visibility::{AllVisible, Hidden, Visibility};
