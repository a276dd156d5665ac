//! # gridkit-clipboard
//!
//! Moves table data in and out of delimited text.
//!
//! - [`encode`] / [`decode`] - the selection-to-clipboard codec (TSV)
//! - [`DelimitedReader`] / [`DelimitedWriter`] - load and save whole tables
//!   as CSV or TSV files
//!
//! ```rust
//! use gridkit_clipboard::{decode, encode, ClipboardOptions};
//! use gridkit_core::{AllVisible, CellPos, Selection, Table};
//!
//! let table = Table::new(
//!     vec!["A".into(), "B".into()],
//!     vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]],
//! )
//! .unwrap();
//!
//! let text = encode(
//!     &Selection::rect(0..2, 1..2),
//!     &table,
//!     &AllVisible,
//!     &ClipboardOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(text, "B\n2\n4\n");
//!
//! let cells = decode("x\ty", CellPos::new(1, 0), &table, &[0, 1], &[0, 1]).unwrap();
//! assert_eq!(cells.len(), 2);
//! ```

mod codec;
mod error;
mod options;
mod reader;
mod writer;

pub use codec::{decode, decode_with, encode, parse, place, CellAssignment};
pub use error::{ClipboardError, ClipboardResult};
pub use options::{ClipboardOptions, HeaderPolicy, LineTerminator, ReadOptions, WriteOptions};
pub use reader::DelimitedReader;
pub use writer::DelimitedWriter;
