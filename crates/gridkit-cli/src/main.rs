//! gridkit CLI - inspect, sort and copy from delimited files

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridkit::prelude::*;
use gridkit::{AllVisible, Clipboard, HeaderPolicy, MemoryClipboard};
use std::io::{self, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridkit")]
#[command(author, version, about = "Inspect, sort and copy from CSV/TSV files")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Field delimiter of the input file (default: from the file extension)
    #[arg(short, long, global = true)]
    delimiter: Option<char>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a file
    Info {
        /// Input file (csv, tsv)
        input: PathBuf,
    },

    /// Print the table, optionally sorted by a column
    Show {
        /// Input file (csv, tsv)
        input: PathBuf,

        /// Column to sort by (name or 0-based index)
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Copy a block of cells and print it as clipboard text
    Copy {
        /// Input file (csv, tsv)
        input: PathBuf,

        /// Rows to copy, 0-based and end-exclusive (e.g. 0..10, 5.., ..3)
        #[arg(short, long, default_value = "..")]
        rows: String,

        /// Columns to copy, by name or 0-based index (default: all)
        #[arg(short, long, value_delimiter = ',')]
        cols: Vec<String>,

        /// Always prepend the header line
        #[arg(long)]
        headers: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let delimiter = cli.delimiter.map(delimiter_byte).transpose()?;

    match cli.command {
        Commands::Info { input } => show_info(&input, delimiter),
        Commands::Show { input, sort, desc } => show(&input, delimiter, sort.as_deref(), desc),
        Commands::Copy {
            input,
            rows,
            cols,
            headers,
        } => copy(&input, delimiter, &rows, &cols, headers),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", c);
    }
    Ok(c as u8)
}

fn load(input: &Path, delimiter: Option<u8>) -> Result<Table> {
    let mut options = ReadOptions::for_path(input);
    if let Some(d) = delimiter {
        options.delimiter = d;
    }
    let table = DelimitedReader::read_file(input, &options)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

/// Resolve a column given by name, falling back to a 0-based index
fn resolve_column(table: &Table, key: &str) -> Result<usize> {
    if let Ok(idx) = table.column_index(key) {
        return Ok(idx);
    }
    match key.parse::<usize>() {
        Ok(idx) if idx < table.column_count() => Ok(idx),
        _ => bail!("Column '{}' not found", key),
    }
}

/// Parse `A..B`, `A..`, `..B` or `..` into a row range clamped to `len`
fn parse_range(text: &str, len: usize) -> Result<Range<usize>> {
    let (start, end) = text
        .split_once("..")
        .with_context(|| format!("Invalid row range '{}' (expected A..B)", text))?;
    let bound = |s: &str, default: usize| -> Result<usize> {
        let s = s.trim();
        if s.is_empty() {
            Ok(default)
        } else {
            s.parse::<usize>()
                .with_context(|| format!("Invalid row number '{}'", s))
        }
    };
    let start = bound(start, 0)?;
    let end = bound(end, len)?.min(len);
    if start > end {
        bail!("Row range '{}' is empty", text);
    }
    Ok(start..end)
}

fn show_info(input: &Path, delimiter: Option<u8>) -> Result<()> {
    let table = load(input, delimiter)?;

    println!("File: {}", input.display());
    println!(
        "Size: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    println!();

    for column in table.columns() {
        let mut kinds: Vec<&str> = table
            .rows()
            .filter_map(|row| row.cell(column.position))
            .filter(|v| !v.is_empty())
            .map(CellValue::type_name)
            .collect();
        kinds.sort_unstable();
        kinds.dedup();
        let kinds = if kinds.is_empty() {
            "empty".to_string()
        } else {
            kinds.join(", ")
        };
        println!("  {:>3}  {}  ({})", column.position, column.name, kinds);
    }

    Ok(())
}

fn show(input: &Path, delimiter: Option<u8>, sort: Option<&str>, desc: bool) -> Result<()> {
    let mut table = load(input, delimiter)?;

    if let Some(key) = sort {
        let col = resolve_column(&table, key)?;
        table
            .sort_by(col, !desc)
            .with_context(|| format!("Failed to sort by '{}'", key))?;
    }

    let mut lines: Vec<Vec<String>> = Vec::with_capacity(table.row_count() + 1);
    lines.push(table.column_names().iter().map(|s| s.to_string()).collect());
    for row in table.rows() {
        lines.push(row.cells().iter().map(ToString::to_string).collect());
    }

    let mut widths = vec![0usize; table.column_count()];
    for line in &lines {
        for (w, text) in widths.iter_mut().zip(line) {
            *w = (*w).max(text.chars().count());
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(text, w)| format!("{:<width$}", text, width = *w))
            .collect();
        writeln!(out, "{}", padded.join("  ").trim_end()).context("Failed to write to stdout")?;
    }

    Ok(())
}

fn copy(
    input: &Path,
    delimiter: Option<u8>,
    rows: &str,
    cols: &[String],
    headers: bool,
) -> Result<()> {
    let table = load(input, delimiter)?;

    let rows = parse_range(rows, table.row_count())?;
    let cols: Vec<usize> = if cols.is_empty() {
        (0..table.column_count()).collect()
    } else {
        cols.iter()
            .map(|key| resolve_column(&table, key))
            .collect::<Result<_>>()?
    };

    let selection: Selection = rows
        .flat_map(|r| cols.iter().map(move |&c| CellPos::new(r, c)))
        .collect();

    let policy = if headers {
        HeaderPolicy::Always
    } else {
        HeaderPolicy::WholeColumns
    };
    let options = ClipboardOptions::default().with_headers(policy);
    let mut grid = Grid::new(table, AllVisible, MemoryClipboard::new()).with_options(options);

    if !grid.copy(&selection).context("Failed to copy selection")? {
        eprintln!("Warning: Nothing to copy");
        return Ok(());
    }

    if let Some(text) = grid.clipboard().text() {
        io::stdout()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
