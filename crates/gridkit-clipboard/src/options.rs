//! Clipboard and file options

use std::path::Path;

/// When [`encode`](crate::encode) prepends a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Only when at least one copied column is selected in its entirety
    #[default]
    WholeColumns,
    /// Always
    Always,
    /// Never
    Never,
}

/// Options for copying to and pasting from the clipboard
#[derive(Debug, Clone)]
pub struct ClipboardOptions {
    /// Field delimiter (default: tab)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Line terminator for encoded text (default: LF)
    pub line_terminator: LineTerminator,
    /// Header row policy
    pub headers: HeaderPolicy,
}

impl Default for ClipboardOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            quote: b'"',
            line_terminator: LineTerminator::LF,
            headers: HeaderPolicy::WholeColumns,
        }
    }
}

impl ClipboardOptions {
    /// Set the header policy
    pub fn with_headers(mut self, headers: HeaderPolicy) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for reading delimited files
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether first row holds column names
    pub has_header: bool,
    /// Automatic type detection (ints, floats, text)
    pub auto_detect_types: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: true,
            auto_detect_types: true,
        }
    }
}

impl ReadOptions {
    /// Tab-separated input
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Pick the delimiter from a file extension (`.tsv`/`.tab` are tab-separated)
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            delimiter: delimiter_for_path(path.as_ref()),
            ..Self::default()
        }
    }
}

/// Options for writing delimited files
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Write header row
    pub write_header: bool,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            write_header: true,
            line_terminator: LineTerminator::LF,
        }
    }
}

impl WriteOptions {
    /// Pick the delimiter from a file extension (`.tsv`/`.tab` are tab-separated)
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            delimiter: delimiter_for_path(path.as_ref()),
            ..Self::default()
        }
    }
}

fn delimiter_for_path(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}

impl LineTerminator {
    pub(crate) fn to_csv(self) -> csv::Terminator {
        match self {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        }
    }
}
