//! Row structures for generated spreadsheets.

use super::Cell;

/// A row in a generated table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    /// Name of the row style, if any
    pub style: Option<String>,
    /// Cells in this row
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(style: Option<String>) -> Self {
        Self {
            style,
            cells: Vec::new(),
        }
    }

    /// Append a cell at the end of the row.
    pub fn append(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}
