//! Tag records and feed items
//!
//! A tag record is the unit of channel and item content: one XML tag expressed
//! as a single-key mapping, e.g. `{"title": "Episode 1"}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::RenderError;

/// One XML tag: a name and its (possibly nested) value.
///
/// Values follow the usual tag-tree conventions:
/// - strings, numbers and booleans are text content
/// - `null` is an empty element
/// - an array holds child records (an `{"_attr": {...}}` entry sets attributes)
/// - an object may carry `_attr` attributes and `_cdata` text
#[derive(Debug, Clone, PartialEq)]
pub struct TagRecord {
    name: String,
    value: Value,
}

impl TagRecord {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a record whose value is a sequence of child records.
    pub fn with_children(name: impl Into<String>, children: Vec<TagRecord>) -> Self {
        Self {
            name: name.into(),
            value: Value::Array(children.into_iter().map(TagRecord::into_value).collect()),
        }
    }

    /// Parse a raw `{name: value}` mapping.
    pub fn from_value(raw: Value) -> Result<Self, RenderError> {
        match raw {
            Value::Object(map) if map.len() == 1 => {
                let (name, value) = map
                    .into_iter()
                    .next()
                    .ok_or_else(|| RenderError::UpstreamData("empty tag record".to_string()))?;
                Ok(Self { name, value })
            }
            Value::Object(map) => Err(RenderError::UpstreamData(format!(
                "tag record must have exactly one key, found {}",
                map.len()
            ))),
            other => Err(RenderError::UpstreamData(format!(
                "tag record must be an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// `(name, value)` of each single-key child when the value is a sequence.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.value
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|entry| {
                let (name, value) = entry.as_object()?.iter().next()?;
                Some((name.as_str(), value))
            })
    }

    /// Whether this record or any nested tag name starts with `prefix`.
    pub fn uses_prefix(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix) || value_uses_prefix(&self.value, prefix)
    }

    pub fn into_value(self) -> Value {
        let mut map = Map::with_capacity(1);
        map.insert(self.name, self.value);
        Value::Object(map)
    }
}

impl Serialize for TagRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for TagRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        TagRecord::from_value(raw).map_err(|err| match err {
            RenderError::UpstreamData(detail) => serde::de::Error::custom(detail),
            other => serde::de::Error::custom(other),
        })
    }
}

/// One RSS `<item>`: an ordered sequence of tag records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedItem(pub Vec<TagRecord>);

impl FeedItem {
    /// Parse a raw feed entry, which must be a sequence of tag records.
    pub fn from_value(raw: Value) -> Result<Self, RenderError> {
        match raw {
            Value::Array(entries) => entries
                .into_iter()
                .map(TagRecord::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map(FeedItem),
            other => Err(RenderError::UpstreamData(format!(
                "feed item must be an array of tag records, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// First record with the given name.
    pub fn find(&self, name: &str) -> Option<&TagRecord> {
        self.0.iter().find(|r| r.is(name))
    }
}

/// Text form of a scalar JSON value.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// JavaScript-style truthiness, used for attribute stripping and defaults.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_uses_prefix(value: &Value, prefix: &str) -> bool {
    match value {
        Value::Array(entries) => entries.iter().any(|v| value_uses_prefix(v, prefix)),
        Value::Object(map) => map
            .iter()
            .any(|(k, v)| k.starts_with(prefix) || value_uses_prefix(v, prefix)),
        _ => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
