//! Schema migration applied once when an entity is constructed.
//!
//! The entity never inspects legacy shapes itself; it trusts whatever the
//! migrator returns.

use serde_json::{Map, Value, json};
use stac_types::{EntityKind, Error, Result, json_type_name};
use tracing::debug;

/// The schema version records are normalized to.
pub const CURRENT_STAC_VERSION: &str = "1.0.0";

/// Asset keys that imply a role in pre-1.0 records.
const ROLE_KEYS: &[&str] = &["thumbnail", "overview"];

/// Brings a raw record of any schema version to the current schema.
///
/// Implementations must return a record with `type`, `links` (array) and
/// `assets` (object) present. Errors are propagated out of entity
/// construction unchanged.
pub trait SchemaMigrator: Send + Sync {
    fn migrate(&self, raw: Value) -> Result<Map<String, Value>>;
}

impl<F> SchemaMigrator for F
where
    F: Fn(Value) -> Result<Map<String, Value>> + Send + Sync,
{
    fn migrate(&self, raw: Value) -> Result<Map<String, Value>> {
        self(raw)
    }
}

/// Best-effort migrator for STAC records.
///
/// Only non-object input is rejected. Everything else is normalized by
/// filling in what is missing; a current-schema record passes through
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StacMigrator;

impl SchemaMigrator for StacMigrator {
    fn migrate(&self, raw: Value) -> Result<Map<String, Value>> {
        let mut record = match raw {
            Value::Object(record) => record,
            other => {
                return Err(Error::NotAnObject {
                    found: json_type_name(&other),
                });
            }
        };

        let legacy = is_legacy_version(record.get("stac_version"));

        ensure_type(&mut record);
        ensure_array(&mut record, "links");
        ensure_object(&mut record, "assets");
        if record.get("type").and_then(Value::as_str) == Some(EntityKind::Item.as_str()) {
            ensure_object(&mut record, "properties");
        }

        if legacy {
            upgrade_legacy(&mut record);
        }

        Ok(record)
    }
}

/// Missing, non-string, `0.x` and `1.0.0-*` pre-release versions predate
/// the current schema.
fn is_legacy_version(version: Option<&Value>) -> bool {
    match version {
        Some(Value::String(v)) => v.starts_with("0.") || v.starts_with("1.0.0-"),
        _ => true,
    }
}

/// Infers `type` for records that lack a string one. An explicit but
/// unrecognised type is kept.
fn ensure_type(record: &mut Map<String, Value>) {
    if record.get("type").is_some_and(Value::is_string) {
        return;
    }
    // collection markers first; pre-1.0 collections may have top-level `properties`
    let kind = if record.contains_key("extent") || record.contains_key("license") {
        EntityKind::Collection
    } else if record.contains_key("geometry") || record.contains_key("properties") {
        EntityKind::Item
    } else {
        EntityKind::Catalog
    };
    debug!("Inferred entity type {kind}");
    record.insert("type".into(), Value::String(kind.as_str().into()));
}

fn ensure_array(record: &mut Map<String, Value>, field: &str) {
    if !record.get(field).is_some_and(Value::is_array) {
        debug!("Replacing missing or malformed `{field}` with an empty array");
        record.insert(field.into(), Value::Array(Vec::new()));
    }
}

fn ensure_object(record: &mut Map<String, Value>, field: &str) {
    if !record.get(field).is_some_and(Value::is_object) {
        debug!("Replacing missing or malformed `{field}` with an empty object");
        record.insert(field.into(), Value::Object(Map::new()));
    }
}

fn upgrade_legacy(record: &mut Map<String, Value>) {
    debug!(
        "Upgrading record from stac_version {:?} to {CURRENT_STAC_VERSION}",
        record.get("stac_version")
    );
    record.insert("stac_version".into(), json!(CURRENT_STAC_VERSION));
    ensure_array(record, "stac_extensions");

    let Some(assets) = record.get_mut("assets").and_then(Value::as_object_mut) else {
        return;
    };
    for (key, asset) in assets.iter_mut() {
        if !ROLE_KEYS.contains(&key.as_str()) {
            continue;
        }
        if let Some(asset) = asset.as_object_mut()
            && !asset.contains_key("roles")
        {
            asset.insert("roles".into(), json!([key]));
        }
    }
}
