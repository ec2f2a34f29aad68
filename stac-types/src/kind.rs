//! Entity sub-type classification.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sub-type of a STAC entity, as recorded in its `type` field.
///
/// Items use the GeoJSON value `"Feature"`; catalogs and collections use
/// their own names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "Feature")]
    Item,
    Catalog,
    Collection,
}

impl EntityKind {
    /// Returns the value stored in the `type` field for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "Feature",
            Self::Catalog => "Catalog",
            Self::Collection => "Collection",
        }
    }

    /// Classifies a raw `type` value. Matching is exact.
    #[must_use]
    pub fn from_type(value: &str) -> Option<Self> {
        match value {
            "Feature" => Some(Self::Item),
            "Catalog" => Some(Self::Catalog),
            "Collection" => Some(Self::Collection),
            _ => None,
        }
    }

    /// True for catalogs and collections.
    #[must_use]
    pub const fn is_catalog_like(&self) -> bool {
        matches!(self, Self::Catalog | Self::Collection)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type(s).ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
