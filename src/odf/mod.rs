//! OpenDocument format support.

/// Core ODF package functionality
pub mod core;
/// ODF XML element classes
pub mod elements;
/// ODF spreadsheet (.ods) support
pub mod ods;

pub use elements::{StyleFamily, StyleMarkup};
pub use ods::OdsDocument;
