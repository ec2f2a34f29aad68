//! Borrowed view over an asset record.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A validated asset: a JSON object with a string `href` whose `roles`,
/// when present, is an array.
///
/// Non-string entries inside `roles` are ignored rather than invalidating
/// the asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asset<'a> {
    key: &'a str,
    fields: &'a Map<String, Value>,
    href: &'a str,
}

impl<'a> Asset<'a> {
    /// Wraps the asset stored under `key`, or returns `None` if it is malformed.
    #[must_use]
    pub fn new(key: &'a str, value: &'a Value) -> Option<Self> {
        let fields = value.as_object()?;
        let href = fields.get("href")?.as_str()?;
        if fields.get("roles").is_some_and(|roles| !roles.is_array()) {
            return None;
        }
        Some(Self { key, fields, href })
    }

    /// The key this asset is stored under in the entity's asset map.
    #[must_use]
    pub fn key(&self) -> &'a str {
        self.key
    }

    #[must_use]
    pub fn href(&self) -> &'a str {
        self.href
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

    /// The string roles of this asset, in document order.
    pub fn roles(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.fields
            .get("roles")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles().any(|r| r == role)
    }

    /// True if at least one of this asset's roles is in `roles`.
    #[must_use]
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        self.roles().any(|r| roles.contains(&r))
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

impl Serialize for Asset<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
