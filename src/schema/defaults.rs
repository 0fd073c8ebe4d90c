//! Document-wide default style names.

use crate::odf::ods::ValueKind;
use serde::Deserialize;

/// Default style names applied when nothing more specific is given.
///
/// An empty name means "no style".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Row style for every table
    pub style_table_row: String,
    /// Cell style for every table, taking precedence over the per-kind styles
    pub style_table_cell: String,
    /// Cell style for text values
    pub style_str: String,
    /// Cell style for integer (and boolean) values
    pub style_int: String,
    /// Cell style for floating-point values
    pub style_float: String,
    /// Cell style for null and other values
    pub style_other: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            style_table_row: "default_table_row".to_string(),
            style_table_cell: String::new(),
            style_str: "left".to_string(),
            style_int: "right".to_string(),
            style_float: "lpod-default-number-style".to_string(),
            style_other: "left".to_string(),
        }
    }
}

/// Partial override of [`Defaults`], as found under the `defaults` key.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefaultsOverride {
    pub style_table_row: Option<String>,
    pub style_table_cell: Option<String>,
    pub style_str: Option<String>,
    pub style_int: Option<String>,
    pub style_float: Option<String>,
    pub style_other: Option<String>,
}

impl Defaults {
    /// Replace every slot the override sets.
    pub fn apply(&mut self, overrides: DefaultsOverride) {
        let DefaultsOverride {
            style_table_row,
            style_table_cell,
            style_str,
            style_int,
            style_float,
            style_other,
        } = overrides;

        let slots = [
            (&mut self.style_table_row, style_table_row),
            (&mut self.style_table_cell, style_table_cell),
            (&mut self.style_str, style_str),
            (&mut self.style_int, style_int),
            (&mut self.style_float, style_float),
            (&mut self.style_other, style_other),
        ];
        for (slot, value) in slots {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// Default cell style for a value kind.
    pub fn for_kind(&self, kind: ValueKind) -> &str {
        match kind {
            ValueKind::String => &self.style_str,
            ValueKind::Integer => &self.style_int,
            ValueKind::Float => &self.style_float,
            ValueKind::Other => &self.style_other,
        }
    }
}

/// `None` for the empty name.
pub(crate) fn non_empty(name: &str) -> Option<&str> {
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.style_table_row, "default_table_row");
        assert_eq!(defaults.style_table_cell, "");
        assert_eq!(defaults.for_kind(ValueKind::String), "left");
        assert_eq!(defaults.for_kind(ValueKind::Integer), "right");
        assert_eq!(defaults.for_kind(ValueKind::Float), "lpod-default-number-style");
        assert_eq!(defaults.for_kind(ValueKind::Other), "left");
    }

    #[test]
    fn test_partial_override_ignores_unknown_keys() {
        let overrides: DefaultsOverride =
            serde_json::from_value(json!({"style_str": "bold", "styles_str": "center"})).unwrap();
        let mut defaults = Defaults::default();
        defaults.apply(overrides);
        assert_eq!(defaults.style_str, "bold");
        assert_eq!(defaults.style_int, "right");
    }

    #[test]
    fn test_override_can_clear_a_slot() {
        let overrides: DefaultsOverride =
            serde_json::from_value(json!({"style_table_row": ""})).unwrap();
        let mut defaults = Defaults::default();
        defaults.apply(overrides);
        assert_eq!(non_empty(&defaults.style_table_row), None);
    }
}
