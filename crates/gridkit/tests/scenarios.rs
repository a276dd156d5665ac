//! End-to-end scenarios for the grid: column edits, sorting, copy/paste

use gridkit::prelude::*;
use gridkit::{decode, encode, AllVisible, Clipboard, DeleteOutcome, MemoryClipboard};
use pretty_assertions::assert_eq;

fn ab_table() -> Table {
    Table::new(
        vec!["A".into(), "B".into()],
        vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]],
    )
    .unwrap()
}

fn column(table: &Table, col: usize) -> Vec<String> {
    (0..table.row_count())
        .map(|r| table.display(r, col).unwrap())
        .collect()
}

/// Insert a column between A and B, then delete it again
#[test]
fn test_insert_and_delete_column_scenario() {
    let mut table = ab_table();

    table.insert_column(1, "X", CellValue::Empty).unwrap();
    assert_eq!(table.column_names(), vec!["A", "X", "B"]);
    assert_eq!(column(&table, 1), vec!["", ""]);

    table.delete_columns(&["X"]).unwrap();
    assert_eq!(table.column_names(), vec!["A", "B"]);
    assert_eq!(column(&table, 0), vec!["1", "3"]);
    assert_eq!(column(&table, 1), vec!["2", "4"]);
}

/// Sort ascending, descending, then restore the original order
#[test]
fn test_sort_cycle_scenario() {
    let mut table = Table::new(
        vec!["A".into()],
        vec![vec![3.into()], vec![1.into()], vec![2.into()]],
    )
    .unwrap();

    table.toggle(0).unwrap();
    assert_eq!(column(&table, 0), vec!["1", "2", "3"]);
    table.toggle(0).unwrap();
    assert_eq!(column(&table, 0), vec!["3", "2", "1"]);
    table.toggle(0).unwrap();
    assert_eq!(column(&table, 0), vec!["3", "1", "2"]);
}

/// Numeric display rules
#[test]
fn test_numeric_formatting() {
    assert_eq!(CellValue::Int(3).to_string(), "3");
    assert_eq!(CellValue::Float(3.0).to_string(), "3");
    assert_eq!(CellValue::Float(3.14159265).to_string(), "3.14159");
    assert_eq!(CellValue::text("abc").to_string(), "abc");
}

/// Copy a whole column with its header and paste it into a fresh table.
/// The header line is pasted as ordinary data.
#[test]
fn test_whole_column_copy_into_fresh_table() {
    let source = ab_table();
    let text = encode(
        &Selection::column(1, source.row_count()),
        &source,
        &AllVisible,
        &ClipboardOptions::default(),
    )
    .unwrap();
    assert_eq!(text, "B\n2\n4\n");

    let mut target = Table::with_columns(["C"]).unwrap();
    target.push_rows(3).unwrap();
    let cells = decode(&text, CellPos::new(0, 0), &target, &[0, 1, 2], &[0]).unwrap();
    for cell in &cells {
        target.set_cell(cell.pos.row, cell.pos.col, &cell.value).unwrap();
    }

    assert_eq!(column(&target, 0), vec!["B", "2", "4"]);
}

/// Paste stops at the table edge instead of failing
#[test]
fn test_paste_at_edge_is_partial() {
    let mut grid = Grid::detached(ab_table());
    grid.clipboard_mut().set_text("a\tb\tc\nd\te\tf\n".into());

    let report = grid.paste(&Selection::cell(1, 1)).unwrap();
    assert_eq!(report.applied, 1);
    assert_eq!(grid.table().display(1, 1).unwrap(), "a");
    assert_eq!(column(grid.table(), 0), vec!["1", "3"]);
}

/// Copying and pasting around hidden rows and columns
#[test]
fn test_copy_paste_with_hidden_lines() {
    let table = Table::new(
        vec!["A".into(), "B".into(), "C".into()],
        (0..4)
            .map(|r| (0..3).map(|c| CellValue::Int(r * 10 + c)).collect())
            .collect(),
    )
    .unwrap();

    let mut hidden = Hidden::new();
    hidden.set_row_hidden(1, true);
    hidden.set_column_hidden(1, true);

    let mut grid = Grid::new(table, hidden, MemoryClipboard::new());
    grid.copy(&Selection::rect(0..3, 0..3)).unwrap();
    assert_eq!(grid.clipboard().text().unwrap(), "0\t2\n20\t22\n");

    // Paste one visible row lower: lands on rows 2 and 3, columns 0 and 2
    grid.paste(&Selection::cell(2, 0)).unwrap();
    let t = grid.table();
    assert_eq!(t.display(2, 0).unwrap(), "0");
    assert_eq!(t.display(2, 2).unwrap(), "2");
    assert_eq!(t.display(3, 0).unwrap(), "20");
    assert_eq!(t.display(3, 2).unwrap(), "22");
    // Hidden cells untouched
    assert_eq!(t.display(2, 1).unwrap(), "21");
    assert_eq!(t.display(1, 0).unwrap(), "10");
}

/// Delete key: columns beat rows, rows beat cells
#[test]
fn test_delete_key_policy() {
    let mut grid = Grid::detached(ab_table());

    let outcome = grid.delete(&Selection::cell(0, 0)).unwrap();
    assert_eq!(outcome, DeleteOutcome::Cells(1));
    assert_eq!(grid.table().get_cell(0, 0).unwrap(), &CellValue::Empty);

    let outcome = grid.delete(&Selection::row(0, 2)).unwrap();
    assert_eq!(outcome, DeleteOutcome::Rows(vec![0]));
    assert_eq!(grid.table().row_count(), 1);

    // With a single row left, a full row is also a full column selection
    let outcome = grid.delete(&Selection::row(0, 2)).unwrap();
    assert_eq!(outcome, DeleteOutcome::Columns(vec!["A".into(), "B".into()]));
    assert_eq!(grid.table().column_count(), 0);
    assert_eq!(grid.table().row_count(), 1);
}

/// Loading a file, editing, and writing it back
#[test]
fn test_file_edit_roundtrip() {
    let data = "name,qty\nbolt,10\nnut,2.5\n";
    let table = DelimitedReader::read(data.as_bytes(), &ReadOptions::default()).unwrap();
    let mut grid = Grid::detached(table);

    grid.header_action(1, HeaderAction::SortAscending).unwrap();
    grid.header_action(0, HeaderAction::Rename("part".into()))
        .unwrap();

    let mut out = Vec::new();
    DelimitedWriter::write(grid.table(), &mut out, &WriteOptions::default()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "part,qty\nnut,2.5\nbolt,10\n"
    );
}
