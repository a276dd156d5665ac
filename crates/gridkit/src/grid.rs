//! Presentation adapter
//!
//! [`Grid`] binds a [`Table`] to a host view. The view supplies visibility
//! and receives change notifications through [`Presenter`]; clipboard text
//! goes through [`Clipboard`]. Every user action of the grid (keyboard
//! shortcuts, header and row context menus, header double-click) has a
//! method here taking an already resolved selection or column.

use gridkit_clipboard::{encode, parse, place, ClipboardError, ClipboardOptions};
use gridkit_core::{
    AllVisible, CellValue, DeleteOutcome, Hidden, MoveDirection, Selection, SortIndicator,
    SortState, Table, TableEvent, Visibility,
};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Result type for grid actions
pub type GridResult<T> = std::result::Result<T, GridError>;

/// Errors surfaced by grid actions
#[derive(Debug, Error)]
pub enum GridError {
    /// Table operation rejected
    #[error(transparent)]
    Table(#[from] gridkit_core::Error),

    /// Clipboard text could not be produced or parsed
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// The host view as seen by the grid
pub trait Presenter: Visibility {
    /// Called after each action with the changes it made
    fn layout_changed(&mut self, _events: &[TableEvent]) {}
}

impl Presenter for AllVisible {}

impl Presenter for Hidden {}

/// Host clipboard (plain UTF-8 text)
pub trait Clipboard {
    /// Replace the clipboard contents
    fn set_text(&mut self, text: String);

    /// Current clipboard contents, if any
    fn text(&self) -> Option<String>;
}

/// In-process clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// An empty clipboard
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }
}

/// Actions offered by a column header's context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    /// Rename the column
    Rename(String),
    /// Insert an empty column with this name to the right
    InsertColumn(String),
    /// Delete the column
    Delete,
    /// Swap with the right neighbour
    MoveRight,
    /// Swap with the left neighbour
    MoveLeft,
    /// Sort ascending by this column
    SortAscending,
    /// Sort descending by this column
    SortDescending,
    /// Discard all edits
    Reload,
}

/// Outcome of a paste
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasteReport {
    /// Cells written
    pub applied: usize,
    /// Pasted fields that fell past the table edge or could not be written
    pub skipped: usize,
}

/// A table bound to a view and a clipboard
#[derive(Debug)]
pub struct Grid<P = AllVisible, C = MemoryClipboard> {
    table: Table,
    presenter: P,
    clipboard: C,
    options: ClipboardOptions,
}

impl Grid {
    /// A grid with nothing hidden and an in-process clipboard
    pub fn detached(table: Table) -> Self {
        Self::new(table, AllVisible, MemoryClipboard::new())
    }
}

impl<P: Presenter, C: Clipboard> Grid<P, C> {
    /// Bind a table to a presenter and a clipboard
    pub fn new(table: Table, presenter: P, clipboard: C) -> Self {
        Self {
            table,
            presenter,
            clipboard,
            options: ClipboardOptions::default(),
        }
    }

    /// Use these clipboard options for copy and paste
    pub fn with_options(mut self, options: ClipboardOptions) -> Self {
        self.options = options;
        self
    }

    /// The underlying table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The presenter
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter (e.g. to hide rows)
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The clipboard
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Mutable access to the clipboard
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// Unbind and return the table
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Header indicator for column `col`
    pub fn sort_indicator(&self, col: usize) -> SortIndicator {
        self.table.sort_indicator(col)
    }

    // === Editing ===

    /// Commit an in-place cell edit
    pub fn edit(&mut self, row: usize, col: usize, raw: &str) -> GridResult<()> {
        let result = self.table.set_cell(row, col, raw);
        self.flush();
        Ok(result?)
    }

    // === Keyboard shortcuts ===

    /// Copy the selection to the clipboard.
    ///
    /// Returns `false` (clipboard untouched) for an empty selection.
    pub fn copy(&mut self, selection: &Selection) -> GridResult<bool> {
        if selection.is_empty() {
            return Ok(false);
        }
        let text = encode(selection, &self.table, &self.presenter, &self.options)?;
        debug!(bytes = text.len(), "copied selection");
        self.clipboard.set_text(text);
        Ok(true)
    }

    /// Paste clipboard text at the top-left visible cell of the selection.
    ///
    /// Cells that fall outside the table are dropped and cells that cannot
    /// be written are skipped; the rest of the paste goes ahead.
    pub fn paste(&mut self, selection: &Selection) -> GridResult<PasteReport> {
        let Some(text) = self.clipboard.text().filter(|t| !t.is_empty()) else {
            return Ok(PasteReport::default());
        };
        let Some(anchor_row) = selection
            .rows()
            .into_iter()
            .find(|&r| !self.presenter.is_row_hidden(r))
        else {
            return Ok(PasteReport::default());
        };
        let Some(anchor_col) = selection
            .columns()
            .into_iter()
            .find(|&c| !self.presenter.is_column_hidden(c))
        else {
            return Ok(PasteReport::default());
        };

        let visible_rows = self.presenter.visible_rows(&self.table);
        let visible_columns = self.presenter.visible_columns(&self.table);
        let parsed = parse(&text, &self.options)?;
        let fields: usize = parsed.iter().map(Vec::len).sum();
        let assignments = place(
            parsed,
            (anchor_row, anchor_col).into(),
            &self.table,
            &visible_rows,
            &visible_columns,
        );

        let mut report = PasteReport {
            applied: 0,
            skipped: fields - assignments.len(),
        };
        for cell in &assignments {
            match self.table.set_cell(cell.pos.row, cell.pos.col, &cell.value) {
                Ok(()) => report.applied += 1,
                Err(e) => {
                    trace!(pos = %cell.pos, error = %e, "paste cell skipped");
                    report.skipped += 1;
                }
            }
        }
        debug!(
            applied = report.applied,
            skipped = report.skipped,
            "pasted clipboard"
        );
        self.flush();
        Ok(report)
    }

    /// Delete whole columns, whole rows, or clear cells, whichever the
    /// selection covers; see [`Table::delete_selection`]
    pub fn delete(&mut self, selection: &Selection) -> GridResult<DeleteOutcome> {
        let result = self.table.delete_selection(selection);
        self.flush();
        Ok(result?)
    }

    // === Menus ===

    /// Run a header context-menu action on column `col`.
    ///
    /// A rejected action leaves the table unchanged and is logged.
    pub fn header_action(&mut self, col: usize, action: HeaderAction) -> GridResult<()> {
        let result = self.apply_header_action(col, &action);
        if let Err(e) = &result {
            warn!(col, ?action, error = %e, "header action rejected");
        }
        self.flush();
        Ok(result?)
    }

    fn apply_header_action(
        &mut self,
        col: usize,
        action: &HeaderAction,
    ) -> gridkit_core::Result<()> {
        let name = self.table.column_name(col)?.to_string();
        match action {
            HeaderAction::Rename(new) => self.table.rename_column(&name, new),
            HeaderAction::InsertColumn(new) => {
                self.table.insert_column(col + 1, new, CellValue::Empty)
            }
            HeaderAction::Delete => self.table.delete_columns(&[name]),
            HeaderAction::MoveRight => self
                .table
                .move_column(&name, MoveDirection::Right)
                .map(|_| ()),
            HeaderAction::MoveLeft => self
                .table
                .move_column(&name, MoveDirection::Left)
                .map(|_| ()),
            HeaderAction::SortAscending => self.table.sort_by(col, true),
            HeaderAction::SortDescending => self.table.sort_by(col, false),
            HeaderAction::Reload => {
                self.table.reload();
                Ok(())
            }
        }
    }

    /// Row context menu: insert `count` blank rows after row `after`.
    ///
    /// A count of zero does nothing. On a table without rows there is no row
    /// to insert after, so the rows are appended and `after` is ignored.
    pub fn insert_rows(&mut self, after: usize, count: usize) -> GridResult<()> {
        if count == 0 {
            return Ok(());
        }
        let result = if self.table.is_empty() {
            self.table.push_rows(count)
        } else {
            self.table.insert_rows(after, count)
        };
        if let Err(e) = &result {
            warn!(after, count, error = %e, "row insert rejected");
        }
        self.flush();
        Ok(result?)
    }

    /// Header double-click: advance the sort cycle on column `col`
    pub fn toggle_sort(&mut self, col: usize) -> GridResult<SortState> {
        let result = self.table.toggle(col);
        self.flush();
        Ok(result?)
    }

    /// Sort ascending by the leftmost selected column.
    ///
    /// Returns `false` for an empty selection.
    pub fn sort_selection(&mut self, selection: &Selection) -> GridResult<bool> {
        let Some(&col) = selection.columns().first() else {
            return Ok(false);
        };
        let result = self.table.sort_by(col, true);
        self.flush();
        result?;
        Ok(true)
    }

    /// Forward pending table events to the presenter
    fn flush(&mut self) {
        let events = self.table.take_events();
        if !events.is_empty() {
            self.presenter.layout_changed(&events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::CellPos;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        hidden: Hidden,
        events: Vec<TableEvent>,
    }

    impl Visibility for Recorder {
        fn is_row_hidden(&self, row: usize) -> bool {
            self.hidden.is_row_hidden(row)
        }

        fn is_column_hidden(&self, col: usize) -> bool {
            self.hidden.is_column_hidden(col)
        }
    }

    impl Presenter for Recorder {
        fn layout_changed(&mut self, events: &[TableEvent]) {
            self.events.extend_from_slice(events);
        }
    }

    fn table() -> Table {
        Table::new(
            vec!["A".into(), "B".into()],
            vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]],
        )
        .unwrap()
    }

    fn recorded() -> Grid<Recorder, MemoryClipboard> {
        Grid::new(table(), Recorder::default(), MemoryClipboard::new())
    }

    #[test]
    fn test_edit_notifies_presenter() {
        let mut grid = recorded();
        grid.edit(0, 1, "7").unwrap();
        assert_eq!(
            grid.presenter().events,
            vec![TableEvent::CellsChanged(vec![CellPos::new(0, 1)])]
        );
        assert!(grid.edit(5, 0, "x").is_err());
        assert_eq!(grid.presenter().events.len(), 1);
    }

    #[test]
    fn test_copy_empty_selection_leaves_clipboard() {
        let mut grid = Grid::detached(table());
        assert!(!grid.copy(&Selection::new()).unwrap());
        assert_eq!(grid.clipboard().text(), None);
    }

    #[test]
    fn test_copy_paste_block() {
        let mut grid = Grid::detached(table());
        assert!(grid.copy(&Selection::cell(0, 0)).unwrap());
        let report = grid.paste(&Selection::cell(1, 1)).unwrap();
        assert_eq!(report, PasteReport { applied: 1, skipped: 0 });
        assert_eq!(grid.table().display(1, 1).unwrap(), "1");
    }

    #[test]
    fn test_paste_without_clipboard_is_noop() {
        let mut grid = recorded();
        let report = grid.paste(&Selection::cell(0, 0)).unwrap();
        assert_eq!(report, PasteReport::default());
        assert!(grid.presenter().events.is_empty());
    }

    #[test]
    fn test_paste_anchor_skips_hidden_selected_row() {
        let mut grid = recorded();
        grid.presenter_mut().hidden.set_row_hidden(0, true);
        grid.clipboard_mut().set_text("9\n".into());
        let report = grid.paste(&Selection::rect(0..2, 0..1)).unwrap();
        assert_eq!(report.applied, 1);
        assert_eq!(grid.table().display(0, 0).unwrap(), "1");
        assert_eq!(grid.table().display(1, 0).unwrap(), "9");
    }

    #[test]
    fn test_header_actions() {
        let mut grid = recorded();
        grid.header_action(0, HeaderAction::InsertColumn("X".into()))
            .unwrap();
        assert_eq!(grid.table().column_names(), vec!["A", "X", "B"]);

        grid.header_action(1, HeaderAction::Rename("Y".into()))
            .unwrap();
        grid.header_action(1, HeaderAction::MoveLeft).unwrap();
        assert_eq!(grid.table().column_names(), vec!["Y", "A", "B"]);

        grid.header_action(2, HeaderAction::MoveRight).unwrap();
        assert_eq!(grid.table().column_names(), vec!["Y", "A", "B"]);

        grid.header_action(0, HeaderAction::Delete).unwrap();
        assert_eq!(grid.table().column_names(), vec!["A", "B"]);

        grid.header_action(0, HeaderAction::SortDescending).unwrap();
        assert_eq!(grid.sort_indicator(0), SortIndicator::Descending);
        assert_eq!(grid.table().display(0, 0).unwrap(), "3");

        grid.header_action(1, HeaderAction::Reload).unwrap();
        assert_eq!(grid.sort_indicator(0), SortIndicator::None);
        assert_eq!(grid.table().display(0, 0).unwrap(), "1");
        assert!(grid.presenter().events.contains(&TableEvent::Reloaded));
    }

    #[test]
    fn test_rejected_header_action_leaves_table() {
        let mut grid = recorded();
        let err = grid
            .header_action(0, HeaderAction::Rename("B".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            GridError::Table(gridkit_core::Error::DuplicateColumn(_))
        ));
        assert!(grid.header_action(9, HeaderAction::Delete).is_err());
        assert_eq!(grid.table().column_names(), vec!["A", "B"]);
        assert!(grid.presenter().events.is_empty());
    }

    #[test]
    fn test_insert_rows_zero_is_noop() {
        let mut grid = recorded();
        grid.insert_rows(0, 0).unwrap();
        assert_eq!(grid.table().row_count(), 2);
        grid.insert_rows(1, 2).unwrap();
        assert_eq!(grid.table().row_count(), 4);
        assert!(grid.insert_rows(10, 1).is_err());
    }

    #[test]
    fn test_insert_rows_after_deleting_every_row() {
        let mut emptied = table();
        emptied.delete_rows(&[0, 1]).unwrap();
        let mut grid = Grid::detached(emptied);
        assert_eq!(grid.table().row_count(), 0);
        assert_eq!(grid.table().column_count(), 2);

        grid.insert_rows(0, 2).unwrap();
        assert_eq!(grid.table().row_count(), 2);
        assert!(grid.table().row(1).unwrap().is_blank());

        let mut fresh = Grid::detached(Table::with_columns(["A"]).unwrap());
        fresh.insert_rows(5, 1).unwrap();
        assert_eq!(fresh.table().row_count(), 1);
    }

    #[test]
    fn test_paste_counts_fields_past_the_edge() {
        let mut grid = Grid::detached(table());
        grid.clipboard_mut().set_text("a\tb\tc\nd\te\tf\n".into());
        let report = grid.paste(&Selection::cell(1, 1)).unwrap();
        assert_eq!(report, PasteReport { applied: 1, skipped: 5 });
    }

    #[test]
    fn test_paste_blank_line_clears_its_row() {
        let mut grid = Grid::new(
            Table::new(
                vec!["A".into()],
                vec![vec![1.into()], vec![2.into()], vec![3.into()]],
            )
            .unwrap(),
            AllVisible,
            MemoryClipboard::new(),
        );
        grid.clipboard_mut().set_text("a\r\n\r\nb\r\n".into());
        let report = grid.paste(&Selection::cell(0, 0)).unwrap();
        assert_eq!(report.applied, 3);
        let column: Vec<String> = (0..3).map(|r| grid.table().display(r, 0).unwrap()).collect();
        assert_eq!(column, vec!["a", "", "b"]);
    }

    #[test]
    fn test_sort_selection_uses_leftmost_column() {
        let mut grid = Grid::detached(table());
        grid.edit(0, 1, "9").unwrap();
        assert!(grid.sort_selection(&Selection::rect(0..1, 1..2)).unwrap());
        assert_eq!(grid.table().sort_state(), &SortState::Ascending("B".into()));
        assert_eq!(grid.table().display(0, 1).unwrap(), "4");
        assert!(!grid.sort_selection(&Selection::new()).unwrap());
    }

    #[test]
    fn test_toggle_sort_reports_state() {
        let mut grid = Grid::detached(table());
        assert_eq!(grid.toggle_sort(1).unwrap(), SortState::Ascending("B".into()));
        assert_eq!(grid.toggle_sort(1).unwrap(), SortState::Descending("B".into()));
        assert_eq!(grid.toggle_sort(1).unwrap(), SortState::Unsorted);
    }
}
