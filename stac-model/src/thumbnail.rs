//! Thumbnail resolution over assets and preview links.

use crate::Entity;
use serde::{Deserialize, Serialize};
use stac_types::{Asset, Link, can_browser_display_image};

/// Asset roles that mark an image as a thumbnail candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailRole {
    Thumbnail,
    Overview,
}

impl ThumbnailRole {
    pub const ALL: [Self; 2] = [Self::Thumbnail, Self::Overview];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Overview => "overview",
        }
    }
}

/// How [`Entity::get_thumbnails`] selects and orders candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailOptions {
    /// Keep only images a browser renders natively (PNG/JPEG/GIF/WebP).
    pub browser_only: bool,
    /// Move assets with this role ahead of the others.
    pub prefer: Option<ThumbnailRole>,
}

impl ThumbnailOptions {
    #[must_use]
    pub fn with_browser_only(mut self, browser_only: bool) -> Self {
        self.browser_only = browser_only;
        self
    }

    #[must_use]
    pub fn with_prefer(mut self, role: ThumbnailRole) -> Self {
        self.prefer = Some(role);
        self
    }
}

/// A thumbnail image, backed either by an asset or by a `preview` link.
///
/// Serializes as the underlying JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Thumbnail<'a> {
    Asset(Asset<'a>),
    Link(Link<'a>),
}

impl<'a> Thumbnail<'a> {
    #[must_use]
    pub fn href(&self) -> &'a str {
        match self {
            Self::Asset(asset) => asset.href(),
            Self::Link(link) => link.href(),
        }
    }

    #[must_use]
    pub fn media_type(&self) -> Option<&'a str> {
        match self {
            Self::Asset(asset) => asset.media_type(),
            Self::Link(link) => link.media_type(),
        }
    }
}

impl Entity {
    /// Thumbnail candidates for this entity.
    ///
    /// Assets with a `thumbnail` or `overview` role come first, in map order;
    /// with `prefer` set, assets carrying that role are moved ahead while both
    /// groups keep their relative order. Only when no such asset exists are
    /// `preview` links used instead.
    #[must_use]
    pub fn get_thumbnails(&self, options: &ThumbnailOptions) -> Vec<Thumbnail<'_>> {
        let roles = ThumbnailRole::ALL.map(|role| role.as_str());
        let mut assets = self.get_assets_with_roles(&roles);
        if let Some(prefer) = options.prefer
            && assets.len() > 1
        {
            // stable: false (has role) sorts before true
            assets.sort_by_key(|asset| !asset.has_role(prefer.as_str()));
        }

        let mut thumbnails: Vec<Thumbnail<'_>> = if assets.is_empty() {
            self.get_links_with_rels(&["preview"])
                .into_iter()
                .map(Thumbnail::Link)
                .collect()
        } else {
            assets.into_iter().map(Thumbnail::Asset).collect()
        };

        if options.browser_only {
            thumbnails.retain(|thumbnail| can_browser_display_image(thumbnail.media_type()));
        }
        thumbnails
    }

    /// The first of [`Entity::get_thumbnails`], if any.
    #[must_use]
    pub fn get_thumbnail(&self, options: &ThumbnailOptions) -> Option<Thumbnail<'_>> {
        self.get_thumbnails(options).into_iter().next()
    }
}
