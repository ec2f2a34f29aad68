use crate::migrate::{SchemaMigrator, StacMigrator};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use stac_types::{Asset, EntityKind, Link, Result, text};
use tracing::{debug, warn};

/// Title used when an entity has neither a title nor an id.
pub const DEFAULT_TITLE: &str = "Untitled";

/// A STAC item, catalog or collection, normalized to the current schema.
///
/// Holds the migrated record as JSON together with where it came from:
/// the absolute URL it was fetched from and the path under which the
/// consumer exposes it. Provenance lives outside the record, so no
/// migrated field can shadow it and serialization emits only the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    fields: Map<String, Value>,
    absolute_url: String,
    browser_path: String,
}

impl Entity {
    /// Migrates `raw` with [`StacMigrator`] and wraps the result.
    pub fn new(
        raw: Value,
        absolute_url: impl Into<String>,
        browser_path: impl Into<String>,
    ) -> Result<Self> {
        Self::with_migrator(raw, absolute_url, browser_path, &StacMigrator)
    }

    /// Migrates `raw` with a caller-supplied migrator. Its error, if any,
    /// is returned as is.
    pub fn with_migrator(
        raw: Value,
        absolute_url: impl Into<String>,
        browser_path: impl Into<String>,
        migrator: &dyn SchemaMigrator,
    ) -> Result<Self> {
        let absolute_url = absolute_url.into();
        let browser_path = browser_path.into();
        let fields = migrator.migrate(raw)?;

        let entity = Self {
            fields,
            absolute_url,
            browser_path,
        };
        match entity.kind() {
            Some(kind) => debug!("Loaded {kind} from {}", entity.absolute_url),
            None => warn!(
                "Entity at {} has unrecognised type {:?}",
                entity.absolute_url,
                entity.fields.get("type")
            ),
        }
        let (bad_links, bad_assets) = entity.malformed_counts();
        if bad_links + bad_assets > 0 {
            debug!(
                "Entity at {} has {bad_links} malformed link(s) and {bad_assets} malformed asset(s); they will be skipped",
                entity.absolute_url
            );
        }
        Ok(entity)
    }

    /// Parses JSON text and constructs the entity from it.
    pub fn from_json_str(
        json: &str,
        absolute_url: impl Into<String>,
        browser_path: impl Into<String>,
    ) -> Result<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Self::new(raw, absolute_url, browser_path)
    }

    fn malformed_counts(&self) -> (usize, usize) {
        let links = self
            .fields
            .get("links")
            .and_then(Value::as_array)
            .map_or(0, |links| links.iter().filter(|v| Link::new(v).is_none()).count());
        let assets = self
            .fields
            .get("assets")
            .and_then(Value::as_object)
            .map_or(0, |assets| {
                assets
                    .iter()
                    .filter(|(key, value)| Asset::new(key, value).is_none())
                    .count()
            });
        (links, assets)
    }

    // ── Kind ─────────────────────────────────────────────────────

    /// The entity's sub-type, derived from its `type` field.
    #[must_use]
    pub fn kind(&self) -> Option<EntityKind> {
        self.fields
            .get("type")
            .and_then(Value::as_str)
            .and_then(EntityKind::from_type)
    }

    #[must_use]
    pub fn is_item(&self) -> bool {
        self.kind() == Some(EntityKind::Item)
    }

    #[must_use]
    pub fn is_catalog(&self) -> bool {
        self.kind() == Some(EntityKind::Catalog)
    }

    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.kind() == Some(EntityKind::Collection)
    }

    /// True for catalogs and collections.
    #[must_use]
    pub fn is_catalog_like(&self) -> bool {
        self.kind().is_some_and(|kind| kind.is_catalog_like())
    }

    // ── Fields ───────────────────────────────────────────────────

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    /// A top-level field of the migrated record.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The migrated record.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    fn properties(&self) -> Option<&Map<String, Value>> {
        self.fields.get("properties").and_then(Value::as_object)
    }

    /// Resolves a metadata field wherever this kind of entity keeps it.
    ///
    /// - Item: `properties[field]`
    /// - Catalog / Collection: the top-level `field`
    /// - Unrecognised type: `None`
    #[must_use]
    pub fn get_metadata(&self, field: &str) -> Option<&Value> {
        match self.kind()? {
            EntityKind::Item => self.properties()?.get(field),
            EntityKind::Catalog | EntityKind::Collection => self.fields.get(field),
        }
    }

    /// The first of `properties.title` (items only), `title` and `id` that
    /// has text, or `default_title`.
    #[must_use]
    pub fn get_display_title<'a>(&'a self, default_title: &'a str) -> &'a str {
        let item_title = match self.kind() {
            Some(EntityKind::Item) => text(self.properties().and_then(|p| p.get("title"))),
            _ => None,
        };
        item_title
            .or_else(|| text(self.fields.get("title")))
            .or_else(|| text(self.fields.get("id")))
            .unwrap_or(default_title)
    }

    /// [`Entity::get_display_title`] with [`DEFAULT_TITLE`].
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.get_display_title(DEFAULT_TITLE)
    }

    #[must_use]
    pub fn browser_path(&self) -> &str {
        &self.browser_path
    }

    #[must_use]
    pub fn absolute_url(&self) -> &str {
        &self.absolute_url
    }

    // ── Links ────────────────────────────────────────────────────

    /// Valid links in document order. Malformed entries are skipped.
    pub fn links(&self) -> impl Iterator<Item = Link<'_>> {
        self.fields
            .get("links")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Link::new)
    }

    /// The first link with relation type `rel`.
    #[must_use]
    pub fn get_link_with_rel(&self, rel: &str) -> Option<Link<'_>> {
        self.links().find(|link| link.rel() == Some(rel))
    }

    /// Links whose relation type is one of `rels`, in document order.
    #[must_use]
    pub fn get_links_with_rels(&self, rels: &[&str]) -> Vec<Link<'_>> {
        self.links().filter(|link| link.has_rel_in(rels)).collect()
    }

    /// Links whose relation type is not one of `rels`, in document order.
    /// Links without a string `rel` are included.
    #[must_use]
    pub fn get_links_with_other_rels(&self, rels: &[&str]) -> Vec<Link<'_>> {
        self.links().filter(|link| !link.has_rel_in(rels)).collect()
    }

    // ── Assets ───────────────────────────────────────────────────

    /// Valid assets in map order. Malformed entries are skipped.
    pub fn assets(&self) -> impl Iterator<Item = Asset<'_>> {
        self.fields
            .get("assets")
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .filter_map(|(key, value)| Asset::new(key, value))
    }

    #[must_use]
    pub fn get_asset(&self, key: &str) -> Option<Asset<'_>> {
        self.assets().find(|asset| asset.key() == key)
    }

    /// Assets carrying at least one of `roles`, in map order.
    #[must_use]
    pub fn get_assets_with_roles(&self, roles: &[&str]) -> Vec<Asset<'_>> {
        self.assets().filter(|asset| asset.has_any_role(roles)).collect()
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
