//! Core ODF package functionality.
//!
//! This module provides the ZIP package writer and the fixed parts of an ODF
//! package (styles.xml skeleton, meta.xml, namespace declarations).

/// ODF package writing
mod writer;

pub(crate) use writer::OFFICE_NAMESPACES;
pub use writer::{PackageWriter, meta_xml, styles_xml};
