//! Borrowed view over a link record.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A validated link: a JSON object whose `href` is a string.
///
/// The view borrows the entity's own JSON, so extra fields stay reachable
/// through [`Link::get`] and serialization reproduces the source object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link<'a> {
    fields: &'a Map<String, Value>,
    href: &'a str,
}

impl<'a> Link<'a> {
    /// Wraps a raw link, or returns `None` if it is not a record with a
    /// string `href`.
    #[must_use]
    pub fn new(value: &'a Value) -> Option<Self> {
        let fields = value.as_object()?;
        let href = fields.get("href")?.as_str()?;
        Some(Self { fields, href })
    }

    #[must_use]
    pub fn href(&self) -> &'a str {
        self.href
    }

    /// The relation type. `None` when absent or not a string.
    #[must_use]
    pub fn rel(&self) -> Option<&'a str> {
        self.fields.get("rel").and_then(Value::as_str)
    }

    /// The media type from the `type` field.
    #[must_use]
    pub fn media_type(&self) -> Option<&'a str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    #[must_use]
    pub fn title(&self) -> Option<&'a str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// True if the relation type is one of `rels`.
    #[must_use]
    pub fn has_rel_in(&self, rels: &[&str]) -> bool {
        self.rel().is_some_and(|rel| rels.contains(&rel))
    }

    /// Any field of the underlying record.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn fields(&self) -> &'a Map<String, Value> {
        self.fields
    }
}

impl Serialize for Link<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
