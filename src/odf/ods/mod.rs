//! OpenDocument Spreadsheet (.ods) document model and writer.
//!
//! The generator builds [`Table`]s of [`Row`]s of [`Cell`]s and hands them to
//! an [`OdsDocument`], which serializes them as an `.ods` package.

mod cell;
mod document;
mod row;
mod table;

pub use cell::{Cell, CellValue, ValueKind};
pub use document::OdsDocument;
pub use row::Row;
pub use table::{Column, Table};
