//! Normalized STAC entity model.
//!
//! Wraps one raw STAC record (item, catalog or collection, any schema
//! version) and answers display-oriented questions about it:
//! - Migrated record plus provenance ([`Entity`]), with kind predicates,
//!   metadata lookup, title resolution and link/asset queries
//! - Schema migration to the current version ([`SchemaMigrator`], bundled
//!   as [`StacMigrator`])
//! - Thumbnail resolution over assets with a preview-link fallback
//!   ([`Thumbnail`], [`ThumbnailOptions`])
//!
//! Construction is the only fallible step. Every query on a constructed
//! entity is total: malformed links and assets are skipped, missing fields
//! resolve to `None` or an empty collection.

mod entity;
mod migrate;
mod thumbnail;

pub use entity::{DEFAULT_TITLE, Entity};
pub use migrate::{CURRENT_STAC_VERSION, SchemaMigrator, StacMigrator};
pub use stac_types::{Asset, EntityKind, Error, Link, Result};
pub use thumbnail::{Thumbnail, ThumbnailOptions, ThumbnailRole};
