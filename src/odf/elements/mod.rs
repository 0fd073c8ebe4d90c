//! ODF XML element classes.

pub mod style;

pub use style::{StyleFamily, StyleMarkup};
