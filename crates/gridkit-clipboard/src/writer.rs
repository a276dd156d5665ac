//! Delimited file writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use gridkit_core::{CellValue, Table};
use tracing::debug;

use crate::error::ClipboardResult;
use crate::options::WriteOptions;

/// CSV/TSV writer for a [`Table`]
pub struct DelimitedWriter;

impl DelimitedWriter {
    /// Write a table to a delimited file
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &WriteOptions,
    ) -> ClipboardResult<()> {
        let file = File::create(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "writing delimited file");
        Self::write(table, file, options)
    }

    /// Write a table to a writer.
    ///
    /// Floats are written at full precision, not at display precision, so
    /// reading the file back yields the same numbers.
    pub fn write<W: Write>(table: &Table, writer: W, options: &WriteOptions) -> ClipboardResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(options.line_terminator.to_csv())
            .from_writer(writer);

        if options.write_header {
            csv_writer.write_record(table.column_names())?;
        }

        for row in table.rows() {
            csv_writer.write_record(row.cells().iter().map(raw_field))?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn raw_field(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Int(n) => n.to_string(),
        CellValue::Float(n) => n.to_string(),
        CellValue::Text(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DelimitedReader, LineTerminator, ReadOptions};
    use pretty_assertions::assert_eq;

    fn table() -> Table {
        Table::new(
            vec!["A".into(), "B".into()],
            vec![
                vec![1.into(), CellValue::Float(3.14159265)],
                vec!["a,b".into(), CellValue::Empty],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        DelimitedWriter::write(&table(), &mut out, &WriteOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A,B\n1,3.14159265\n\"a,b\",\n"
        );
    }

    #[test]
    fn test_write_crlf_without_header() {
        let opts = WriteOptions {
            write_header: false,
            line_terminator: LineTerminator::CRLF,
            delimiter: b'\t',
            ..WriteOptions::default()
        };
        let mut out = Vec::new();
        DelimitedWriter::write(&table(), &mut out, &opts).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1\t3.14159265\r\na,b\t\r\n"
        );
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let original = table();
        DelimitedWriter::write_file(&original, &path, &WriteOptions::for_path(&path)).unwrap();

        let back = DelimitedReader::read_file(&path, &ReadOptions::for_path(&path)).unwrap();
        assert_eq!(back.column_names(), original.column_names());
        let cells: Vec<Vec<CellValue>> = back.rows().map(|r| r.cells().to_vec()).collect();
        let expected: Vec<Vec<CellValue>> = original.rows().map(|r| r.cells().to_vec()).collect();
        assert_eq!(cells, expected);
    }
}
