//! Splitting polymorphic schema nodes into payload and options.
//!
//! Every level of the input (document, table, row, cell) may be written either
//! as a bare value, e.g. `["a", "b"]`, or as an object carrying the same value
//! under a payload key next to inline options, e.g.
//! `{"row": ["a", "b"], "style": "bold"}`. [`split`] turns both shapes into the
//! same `(payload, options)` pair without touching the input.

use serde_json::{Map, Value};
use smallvec::SmallVec;

pub const BODY: &str = "body";
pub const TABLE: &str = "table";
pub const ROW: &str = "row";
pub const VALUE: &str = "value";
pub const NAME: &str = "name";
pub const WIDTH: &str = "width";
pub const STYLE: &str = "style";
pub const STYLES: &str = "styles";
pub const DEFAULTS: &str = "defaults";
pub const TEXT: &str = "text";

/// Payload of an annotated object missing its payload key.
static EMPTY: Value = Value::Array(Vec::new());

/// Ordered list of style names attached to a node.
pub type StyleCandidates<'a> = SmallVec<[&'a str; 4]>;

/// A schema node seen through the payload key of its level.
#[derive(Debug, Clone, Copy)]
pub enum SchemaNode<'a> {
    /// A bare list or scalar: the node is its own payload.
    Collection(&'a Value),
    /// An object holding the payload under `key` next to inline options.
    Annotated {
        key: &'static str,
        fields: &'a Map<String, Value>,
    },
}

impl<'a> SchemaNode<'a> {
    pub fn new(node: &'a Value, key: &'static str) -> Self {
        match node {
            Value::Object(fields) => Self::Annotated { key, fields },
            other => Self::Collection(other),
        }
    }

    /// The node's payload; an empty list when an object lacks the payload key.
    pub fn payload(&self) -> &'a Value {
        match *self {
            Self::Collection(value) => value,
            Self::Annotated { key, fields } => fields.get(key).unwrap_or(&EMPTY),
        }
    }

    /// The node's options: every field except the payload key.
    pub fn options(&self) -> Options<'a> {
        match *self {
            Self::Collection(_) => Options::default(),
            Self::Annotated { key, fields } => Options {
                fields: Some(fields),
                payload_key: key,
            },
        }
    }
}

/// Split `node` on `key` into its payload and its options.
pub fn split<'a>(node: &'a Value, key: &'static str) -> (&'a Value, Options<'a>) {
    let node = SchemaNode::new(node, key);
    (node.payload(), node.options())
}

/// Children of a payload at a collection level.
///
/// A list yields its items, `null` yields nothing, and any other value is a
/// single child.
pub fn children(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(items) => items,
        Value::Null => &[],
        other => std::slice::from_ref(other),
    }
}

/// Read-only view of the options attached to a node.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options<'a> {
    fields: Option<&'a Map<String, Value>>,
    payload_key: &'static str,
}

impl<'a> Options<'a> {
    /// Option value by name. `null` counts as absent.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        if name == self.payload_key {
            return None;
        }
        self.fields?.get(name).filter(|v| !v.is_null())
    }

    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }

    /// Option names, payload key excluded.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields
            .into_iter()
            .flat_map(|fields| fields.keys())
            .map(String::as_str)
            .filter(move |k| *k != self.payload_key)
    }

    /// Scalar option rendered as text; strings, numbers and booleans qualify.
    pub fn text_value(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The `style` option as an ordered candidate list.
    ///
    /// A single string is a one-element list; empty names and non-string
    /// entries are skipped.
    pub fn style_candidates(&self) -> StyleCandidates<'a> {
        match self.get(STYLE) {
            Some(Value::String(s)) if !s.is_empty() => SmallVec::from_slice(&[s.as_str()]),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .collect(),
            _ => SmallVec::new(),
        }
    }
}
