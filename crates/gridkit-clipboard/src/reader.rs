//! Delimited file reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ahash::AHashSet;
use gridkit_core::{CellValue, Table};
use tracing::debug;

use crate::error::ClipboardResult;
use crate::options::ReadOptions;

/// CSV/TSV reader producing a [`Table`]
pub struct DelimitedReader;

impl DelimitedReader {
    /// Read a delimited file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> ClipboardResult<Table> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "reading delimited file");
        Self::read(file, options)
    }

    /// Read delimited data from a reader into a table.
    ///
    /// Without a header row, columns are named `0`, `1`, ... Repeated
    /// header names get a numeric suffix (`A`, `A.1`, ...) so column names
    /// stay unique.
    pub fn read<R: Read>(reader: R, options: &ReadOptions) -> ClipboardResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut headers: Vec<String> = if options.has_header {
            csv_reader.headers()?.iter().map(str::to_string).collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        CellValue::detect(field)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::text(field)
                    }
                })
                .collect();
            rows.push(row);
        }

        // Unnamed extra columns (or no header at all) get positional names
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        while headers.len() < width {
            headers.push(headers.len().to_string());
        }

        debug!(rows = rows.len(), cols = headers.len(), "read delimited data");
        Ok(Table::new(unique_names(headers), rows)?)
    }
}

/// Make column names unique by suffixing repeats with `.1`, `.2`, ...
fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut seen: AHashSet<String> = AHashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, n);
            n += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_csv_detects_types() {
        let data = "name,age,score\nada,36,9.5\nbob,,x\n";
        let t = DelimitedReader::read(data.as_bytes(), &ReadOptions::default()).unwrap();
        assert_eq!(t.column_names(), vec!["name", "age", "score"]);
        assert_eq!(t.get_cell(0, 1).unwrap(), &CellValue::Int(36));
        assert_eq!(t.get_cell(0, 2).unwrap(), &CellValue::Float(9.5));
        assert_eq!(t.get_cell(1, 1).unwrap(), &CellValue::Empty);
        assert_eq!(t.get_cell(1, 2).unwrap(), &CellValue::text("x"));
    }

    #[test]
    fn test_read_tsv_without_header() {
        let opts = ReadOptions {
            has_header: false,
            ..ReadOptions::tsv()
        };
        let t = DelimitedReader::read("1\t2\n3\n".as_bytes(), &opts).unwrap();
        assert_eq!(t.column_names(), vec!["0", "1"]);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.get_cell(1, 1).unwrap(), &CellValue::Empty);
    }

    #[test]
    fn test_read_without_type_detection() {
        let opts = ReadOptions {
            auto_detect_types: false,
            ..ReadOptions::default()
        };
        let t = DelimitedReader::read("A\n42\n".as_bytes(), &opts).unwrap();
        assert_eq!(t.get_cell(0, 0).unwrap(), &CellValue::text("42"));
    }

    #[test]
    fn test_duplicate_headers_are_suffixed() {
        let t = DelimitedReader::read("A,A,A.1\n1,2,3\n".as_bytes(), &ReadOptions::default())
            .unwrap();
        assert_eq!(t.column_names(), vec!["A", "A.1", "A.1.1"]);
    }

    #[test]
    fn test_wide_rows_get_extra_columns() {
        let t = DelimitedReader::read("A\n1,2\n".as_bytes(), &ReadOptions::default()).unwrap();
        assert_eq!(t.column_names(), vec!["A", "1"]);
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        std::fs::write(&path, "A\tB\n1\t2\n").unwrap();
        let t = DelimitedReader::read_file(&path, &ReadOptions::for_path(&path)).unwrap();
        assert_eq!(t.column_names(), vec!["A", "B"]);
        assert_eq!(t.display(0, 1).unwrap(), "2");
    }
}
