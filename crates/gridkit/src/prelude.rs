//! Prelude module - common imports for gridkit users
//!
//! ```rust
//! use gridkit::prelude::*;
//! ```

pub use crate::{
    // Cell and table types
    CellPos,
    CellValue,
    // Clipboard and I/O types
    ClipboardOptions,
    DelimitedReader,
    DelimitedWriter,

    // Error types
    Error,
    // Presentation types
    Grid,
    GridError,
    HeaderAction,
    Hidden,
    MoveDirection,
    Presenter,
    ReadOptions,
    Result,
    Selection,
    SortIndicator,
    SortState,
    Table,
    TableEvent,
    Visibility,
    WriteOptions,
};
