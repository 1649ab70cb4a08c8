//! Selection handling for selectable tables.

use horizon_narrator_core::{AccessibleNodeExt, AccessibleTable, SpeechSink, StateSet, speak};

/// Called after a selectable table has been read.
pub trait TableSelectionHandler: Send + Sync {
    /// React to the current selection of `table`.
    fn handle_selection(&self, table: &dyn AccessibleTable, speech: &dyn SpeechSink);
}

/// Does nothing. The narrator's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreSelection;

impl TableSelectionHandler for IgnoreSelection {
    fn handle_selection(&self, _table: &dyn AccessibleTable, _speech: &dyn SpeechSink) {}
}

/// Speaks `"selected {name}"` for every selected cell, row by row.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectedCellAnnouncer;

impl TableSelectionHandler for SelectedCellAnnouncer {
    fn handle_selection(&self, table: &dyn AccessibleTable, speech: &dyn SpeechSink) {
        for row in 0..table.row_count() {
            for column in 0..table.column_count() {
                if let Some(cell) = table.cell_at(row, column)
                    && cell.states().contains(StateSet::SELECTED)
                {
                    speak(speech, &format!("selected {}", cell.name_or_empty()));
                }
            }
        }
    }
}
