//! Schema engine: turns a tab/row/cell description into a styled document.
//!
//! The input is a [`serde_json::Value`] tree. Every level accepts a bare list
//! or an object holding the list under its payload key (`body`, `table`,
//! `row`, `value`) next to options such as `style`, `name`, `width` and
//! `text`. See [`node`] for the splitting rules.

pub mod builtin;
pub mod defaults;
pub mod generator;
pub mod node;
pub mod registry;
pub mod width;

pub use builtin::BUILTIN_STYLES;
pub use defaults::{Defaults, DefaultsOverride};
pub use generator::{OdsGenerator, content_to_ods, generate};
pub use node::{Options, SchemaNode, split};
pub use registry::{StyleDefinition, StyleRegistry, StyleSpec};
pub use width::apply_widths;

#[cfg(test)]
mod tests;
