//! Record model produced by the parser.
//!
//! Field names and cardinality are driven by page content, so a [`Record`] is
//! an ordered list of `(name, value)` pairs rather than a fixed struct. It
//! serializes as a JSON object whose keys appear in first-assignment order,
//! with `id` first.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Name of the field that always carries the section title.
pub const ID_FIELD: &str = "id";

/// Name of the field that accumulates free text lines.
pub const SECTION_BODY_FIELD: &str = "section body";

/// Value of a single record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Scalar from `* key: value`, or the accumulated section body.
    Text(String),
    /// Items collected from `** item` lines under a `* key` bullet.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns the scalar text, if this is a [`FieldValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    /// Returns the items, if this is a [`FieldValue::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }

    /// `true` for a list without items.
    #[must_use]
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// One structured object, produced from one `=== Title ===` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Creates a record holding only its `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            fields: vec![(ID_FIELD.to_string(), FieldValue::Text(id.into()))],
        }
    }

    /// The section title this record was built from.
    ///
    /// A bullet named `id` can overwrite it; a list there yields `""`.
    pub fn id(&self) -> &str {
        self.get(ID_FIELD)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    /// Free text collected from non-bullet lines, if any.
    pub fn section_body(&self) -> Option<&str> {
        self.get(SECTION_BODY_FIELD).and_then(FieldValue::as_text)
    }

    /// Looks up a field by name.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.fields
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// `true` when a field with this name exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Sets a field. An existing field keeps its position; a new one is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(slot) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let pos = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(pos).1)
    }

    /// Number of fields, `id` included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false` for records built by the parser, which carry an `id`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in output order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to strings or string lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Record, A::Error> {
                let mut fields: Vec<(String, FieldValue)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
                    match fields.iter_mut().find(|(k, _)| *k == key) {
                        Some(slot) => slot.1 = value,
                        None => fields.push((key, value)),
                    }
                }
                Ok(Record { fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Severity of a parser diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Content was skipped as expected by the format's leniency rules.
    Info,
    /// Content was skipped and was probably meant to be data.
    Warn,
}

/// A note about content the parser skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How noteworthy the skipped content is.
    pub severity: DiagnosticSeverity,
    /// Human readable description.
    pub message: String,
    /// 1-based line in the fetched document, when known.
    pub line: Option<usize>,
}
