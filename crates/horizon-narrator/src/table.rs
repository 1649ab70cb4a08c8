//! Table reading.
//!
//! Tables with a header row are read column by column so each header is
//! immediately followed by its values. Without headers there is nothing to
//! group by, and cells are read row by row.

use horizon_narrator_core::{AccessibleNode, AccessibleNodeExt, AccessibleTable};

use crate::narrator::Narrator;

impl Narrator {
    pub(crate) fn read_table(&self, node: &dyn AccessibleNode, table: &dyn AccessibleTable) {
        let columns = table.column_count();
        let rows = table.row_count();
        let name = node.name_or_empty();

        self.speak(&format!("{name} table with {columns} columns and {rows} rows"));

        match table.column_headers() {
            Some(headers) => {
                for column in 0..columns {
                    self.speak(&format!("column {}", column + 1));
                    self.read_cell(headers.get(column).copied().flatten());

                    for row in 0..rows {
                        self.read_cell(table.cell_at(row, column));
                    }
                }
            }
            None => {
                self.speak("table data");
                for row in 0..rows {
                    for column in 0..columns {
                        self.read_cell(table.cell_at(row, column));
                    }
                }
            }
        }
    }

    fn read_cell(&self, cell: Option<&dyn AccessibleNode>) {
        match cell {
            Some(cell) => self.read_node(cell),
            None => self.speak("empty"),
        }
    }
}
