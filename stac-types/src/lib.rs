//! Core type definitions for STAC catalog entities.
//!
//! This crate defines the schema-level vocabulary shared by the entity model:
//! - Entity sub-types ([`EntityKind`]: item, catalog, collection)
//! - Borrowed, validated views over raw JSON records ([`Link`], [`Asset`])
//! - Predicates for title and thumbnail resolution ([`has_text`],
//!   [`can_browser_display_image`])
//!
//! Nothing here owns an entity; see `stac-model` for the wrapper itself.

mod asset;
mod kind;
mod link;
mod media;
mod text;

pub use asset::Asset;
pub use kind::EntityKind;
pub use link::Link;
pub use media::can_browser_display_image;
pub use text::{has_text, text};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or migrating an entity.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unknown entity type: {0}")]
    UnknownKind(String),

    #[error("migration failed: {0}")]
    Migration(String),
}

/// Short name of a JSON value's type, for error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
