//! odsgen - Generate styled OpenDocument spreadsheets from structured data
//!
//! The input describes a workbook as nested lists: a document is a list of
//! tabs, a tab a list of rows, a row a list of cells. Any level may instead be
//! an object carrying the list under its payload key together with options
//! (style names, tab name, column widths, display text). Styles cascade from
//! the document defaults down to each cell, and only styles actually used are
//! written to the output.
//!
//! # Features
//!
//! - **Polymorphic schema**: bare values and annotated objects at every level
//! - **Style cascade**: table, row and cell options, then type-driven defaults
//! - **Built-in style catalog**: extendable or overridable per document
//! - **Column widths**: per column or for the whole tab
//! - **JSON and YAML input**
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//!
//! # fn main() -> odsgen::Result<()> {
//! let content = json!({
//!     "body": [{
//!         "name": "Prices",
//!         "width": ["4cm", "2cm"],
//!         "table": [
//!             {"row": ["Item", "Price"], "style": ["bold_left_bg_gray_grid06"]},
//!             ["Apple", 1.25],
//!             ["Pear", {"value": 2, "style": "center"}],
//!         ],
//!     }],
//! });
//! odsgen::content_to_ods(&content, "prices.ods")?;
//! # Ok(())
//! # }
//! ```

/// Output document seam
pub mod backend;

/// Errors and XML helpers shared across the crate
pub mod common;

/// Schema file loading (JSON or YAML)
pub mod input;

/// OpenDocument package, style and spreadsheet writing
pub mod odf;

/// Schema traversal, style registry and defaults cascade
pub mod schema;

// Re-export commonly used types for convenience
pub use backend::{BackendVersion, DocumentBackend, MIN_BACKEND_VERSION, check_backend_version};
pub use common::{Error, Result};
pub use input::load_content;
pub use odf::OdsDocument;
pub use schema::{Defaults, OdsGenerator, StyleRegistry, content_to_ods, generate};
