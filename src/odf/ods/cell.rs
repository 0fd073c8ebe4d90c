//! Cell data structures for generated spreadsheets.

use serde_json::Value;

/// Cell data types written to ODF spreadsheets.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (null, or a value with no spreadsheet representation)
    Empty,
    /// Text string
    Text(String),
    /// Integral number, covering the whole `i64` and `u64` ranges
    Integer(i128),
    /// Floating-point number
    Float(f64),
    /// Boolean value
    Boolean(bool),
}

/// Runtime kind of a cell value, used to pick a default cell style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Other,
}

impl CellValue {
    /// Convert a schema value into a cell value.
    ///
    /// Integral numbers (signed or unsigned 64-bit) are integers, every other number is a float.
    /// Arrays and objects have no cell representation and become `Empty`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Self::Integer(i128::from(i)),
                (None, Some(u)) => Self::Integer(i128::from(u)),
                (None, None) => n.as_f64().map(Self::Float).unwrap_or(Self::Empty),
            },
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Empty,
        }
    }

    /// Kind used for default style selection.
    ///
    /// Booleans count as integers so they share the integer alignment.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::String,
            Self::Integer(_) | Self::Boolean(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Empty => ValueKind::Other,
        }
    }

    /// Text shown in the cell when no override is given.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(t) => t.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Empty => String::new(),
        }
    }
}

/// A cell in a generated table.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// The cell value
    pub value: CellValue,
    /// Name of the cell style, if any
    pub style: Option<String>,
    /// Literal text displayed instead of the rendered value
    pub text: Option<String>,
}

impl Cell {
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style: None,
            text: None,
        }
    }

    /// Text displayed in the cell: the override when present, else the rendered value.
    pub fn text(&self) -> String {
        self.text
            .clone()
            .unwrap_or_else(|| self.value.display_text())
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self.value, CellValue::Empty) && self.text.is_none()
    }
}
