//! Table (sheet) structures for generated spreadsheets.

use super::Row;

/// A column of a table. Columns only carry styling; cells live in rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    /// Name of the column style, if any
    pub style: Option<String>,
}

/// A table (sheet) in a generated spreadsheet.
///
/// Tables contain rows of cells, a name shown on the sheet tab, and the
/// column definitions that have been explicitly set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Table name
    pub name: String,
    /// Rows in this table
    pub rows: Vec<Row>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Append a row at the end of the table.
    pub fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of columns: the widest row, or the highest column explicitly set.
    pub fn width(&self) -> usize {
        let max_cells = self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
        max_cells.max(self.columns.len())
    }

    /// Get the column at `index`. Columns never set are returned unstyled.
    pub fn get_column(&self, index: usize) -> Column {
        self.columns.get(index).cloned().unwrap_or_default()
    }

    /// Replace the column at `index`, growing the column list when needed.
    pub fn set_column(&mut self, index: usize, column: Column) {
        if index >= self.columns.len() {
            self.columns.resize_with(index + 1, Column::default);
        }
        self.columns[index] = column;
    }

    /// Point every column styled `from` at `to` instead.
    pub fn rename_column_style(&mut self, from: &str, to: &str) {
        for column in &mut self.columns {
            if column.style.as_deref() == Some(from) {
                column.style = Some(to.to_string());
            }
        }
    }

    /// All columns up to [`Table::width`].
    pub fn columns(&self) -> Vec<Column> {
        (0..self.width()).map(|i| self.get_column(i)).collect()
    }
}
