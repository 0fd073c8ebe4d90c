//! XML helpers shared by the ODF writer.

mod escape;

pub use escape::escape_xml;
