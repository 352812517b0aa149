//! JSON body classification.
//!
//! Pure functions deciding how a single JSON node is presented in a row.
//! The row's expand state lives in the bound cell; this module only answers
//! "what does this value look like" and "what goes in the nested list".

use crate::model::ItemSection;
use serde_json::{Map, Value};

/// Kind of container behind a collapsible placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// JSON object.
    Object,
    /// JSON array.
    Array,
}

impl ContainerKind {
    /// Container kind of a value, `None` for primitives.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => Some(ContainerKind::Object),
            Value::Array(_) => Some(ContainerKind::Array),
            _ => None,
        }
    }

    /// Text shown while collapsed.
    pub fn placeholder(self) -> &'static str {
        match self {
            ContainerKind::Object => "{...}",
            ContainerKind::Array => "[...]",
        }
    }

    /// Opening bracket shown while expanded.
    pub fn open(self) -> &'static str {
        match self {
            ContainerKind::Object => "{",
            ContainerKind::Array => "[",
        }
    }

    /// Closing bracket shown while expanded.
    pub fn close(self) -> &'static str {
        match self {
            ContainerKind::Object => "}",
            ContainerKind::Array => "]",
        }
    }
}

/// How a JSON node is presented in its row.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyPresentation {
    /// Nothing to show (empty object).
    Empty,
    /// Inline primitive, already formatted as `value,`.
    Primitive {
        /// Display text.
        text: String,
    },
    /// Single-key object with a primitive value: `"key"` and `"value",`.
    Field {
        /// Quoted key.
        key: String,
        /// Quoted value with trailing comma.
        value: String,
    },
    /// Single-key object whose value is a container; starts collapsed.
    Expandable {
        /// Quoted key.
        key: String,
        /// Object or array.
        kind: ContainerKind,
        /// The container value, wrapped into the nested list on expand.
        value: Value,
    },
    /// Multi-key object or array: no inline fields, only a nested list.
    Nested {
        /// One section per property or element, in original order.
        children: Vec<ItemSection>,
    },
}

/// Classify a JSON node, in priority order: primitive, empty object,
/// single-key object, multi-key object, array.
pub fn classify(value: &Value) -> BodyPresentation {
    match value {
        Value::Object(map) => classify_object(map),
        Value::Array(elements) => BodyPresentation::Nested {
            children: elements.iter().cloned().map(ItemSection::json).collect(),
        },
        primitive => BodyPresentation::Primitive {
            text: format!("{},", primitive_text(primitive)),
        },
    }
}

fn classify_object(map: &Map<String, Value>) -> BodyPresentation {
    let mut entries = map.iter();
    match (entries.next(), entries.next()) {
        (None, _) => BodyPresentation::Empty,
        (Some((key, value)), None) => {
            let key = format!("\"{key}\"");
            match ContainerKind::of(value) {
                Some(kind) => BodyPresentation::Expandable {
                    key,
                    kind,
                    value: value.clone(),
                },
                None => BodyPresentation::Field {
                    key,
                    value: format!("\"{}\",", primitive_text(value)),
                },
            }
        }
        _ => BodyPresentation::Nested {
            children: split_properties(map),
        },
    }
}

/// One single-key wrapper object per property, in original key order.
pub fn split_properties(map: &Map<String, Value>) -> Vec<ItemSection> {
    map.iter()
        .map(|(key, value)| {
            let mut wrapper = Map::new();
            wrapper.insert(key.clone(), value.clone());
            ItemSection::json(Value::Object(wrapper))
        })
        .collect()
}

/// Items of the nested list shown while a placeholder is expanded:
/// exactly one section wrapping the full value.
pub fn expanded_items(value: &Value) -> Vec<ItemSection> {
    vec![ItemSection::json(value.clone())]
}

/// Display text of a primitive: strings unquoted, everything else as JSON.
pub fn primitive_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
