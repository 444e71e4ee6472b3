use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A field's value, either a default declared by a template or one entered at runtime.
///
/// Serialized untagged, so the wire form is a bare JSON string, boolean or object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Str(String),
    Dict(BTreeMap<String, String>),
}

/// The full field-value mapping of one node, keyed by field name.
pub type FieldValues = AHashMap<String, FieldValue>;

impl FieldValue {
    /// Shorthand for an empty string value.
    pub fn empty_str() -> Self {
        FieldValue::Str(String::new())
    }

    /// Truthiness as the editor front end sees it: `false`, `""` and `{}` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Str(s) => !s.is_empty(),
            FieldValue::Dict(d) => !d.is_empty(),
        }
    }

    /// Whether the value counts as "unset" for a required field. Booleans are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Bool(_) => false,
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Dict(d) => d.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            FieldValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Parses a value typed on a command line or in a text box.
    ///
    /// `true`/`false` become booleans, a JSON object becomes a dict, anything else a string.
    pub fn parse_loose(raw: &str) -> Self {
        match raw {
            "true" => FieldValue::Bool(true),
            "false" => FieldValue::Bool(false),
            _ if raw.trim_start().starts_with('{') => serde_json::from_str(raw)
                .map(FieldValue::Dict)
                .unwrap_or_else(|_| FieldValue::Str(raw.to_string())),
            _ => FieldValue::Str(raw.to_string()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<BTreeMap<String, String>> for FieldValue {
    fn from(d: BTreeMap<String, String>) -> Self {
        FieldValue::Dict(d)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Str(s) => write!(f, "\"{}\"", s),
            FieldValue::Dict(d) => write!(
                f,
                "{{{}}}",
                d.iter().map(|(k, v)| format!("{}: \"{}\"", k, v)).join(", ")
            ),
        }
    }
}
