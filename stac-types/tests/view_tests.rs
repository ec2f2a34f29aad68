use pretty_assertions::assert_eq;
use serde_json::json;
use stac_types::{Asset, Link};

// ── Link validation ──────────────────────────────────────────────

#[test]
fn link_requires_object() {
    assert!(Link::new(&json!("https://example.com")).is_none());
    assert!(Link::new(&json!(null)).is_none());
    assert!(Link::new(&json!([{"href": "a"}])).is_none());
}

#[test]
fn link_requires_string_href() {
    assert!(Link::new(&json!({"rel": "self"})).is_none());
    assert!(Link::new(&json!({"rel": "self", "href": 42})).is_none());
    assert!(Link::new(&json!({"rel": "self", "href": null})).is_none());
}

#[test]
fn link_without_rel_is_still_valid() {
    let value = json!({"href": "a.json"});
    let link = Link::new(&value).unwrap();
    assert_eq!(link.href(), "a.json");
    assert_eq!(link.rel(), None);
    assert!(!link.has_rel_in(&["self"]));
}

// ── Link accessors ───────────────────────────────────────────────

#[test]
fn link_exposes_fields() {
    let value = json!({
        "rel": "child",
        "href": "./sub/catalog.json",
        "type": "application/json",
        "title": "Sub",
        "method": "GET"
    });
    let link = Link::new(&value).unwrap();
    assert_eq!(link.rel(), Some("child"));
    assert_eq!(link.href(), "./sub/catalog.json");
    assert_eq!(link.media_type(), Some("application/json"));
    assert_eq!(link.title(), Some("Sub"));
    assert_eq!(link.get("method"), Some(&json!("GET")));
    assert!(link.has_rel_in(&["item", "child"]));
}

#[test]
fn link_serializes_to_source_object() {
    let value = json!({"rel": "self", "href": "x", "extra": {"a": 1}});
    let link = Link::new(&value).unwrap();
    assert_eq!(serde_json::to_value(link).unwrap(), value);
}

// ── Asset validation ─────────────────────────────────────────────

#[test]
fn asset_requires_object_with_string_href() {
    assert!(Asset::new("a", &json!("data.tif")).is_none());
    assert!(Asset::new("a", &json!({"type": "image/png"})).is_none());
    assert!(Asset::new("a", &json!({"href": 1})).is_none());
}

#[test]
fn asset_rejects_non_array_roles() {
    assert!(Asset::new("a", &json!({"href": "x", "roles": "thumbnail"})).is_none());
    assert!(Asset::new("a", &json!({"href": "x", "roles": {"0": "data"}})).is_none());
}

#[test]
fn asset_without_roles_is_valid_but_roleless() {
    let value = json!({"href": "data.tif"});
    let asset = Asset::new("data", &value).unwrap();
    assert_eq!(asset.roles().count(), 0);
    assert!(!asset.has_any_role(&["data"]));
}

// ── Asset accessors ──────────────────────────────────────────────

#[test]
fn asset_exposes_fields() {
    let value = json!({
        "href": "thumb.png",
        "type": "image/png",
        "title": "Thumbnail",
        "roles": ["thumbnail", "overview"]
    });
    let asset = Asset::new("thumb", &value).unwrap();
    assert_eq!(asset.key(), "thumb");
    assert_eq!(asset.href(), "thumb.png");
    assert_eq!(asset.media_type(), Some("image/png"));
    assert_eq!(asset.title(), Some("Thumbnail"));
    assert_eq!(asset.roles().collect::<Vec<_>>(), vec!["thumbnail", "overview"]);
}

#[test]
fn asset_roles_skip_non_strings() {
    let value = json!({"href": "x", "roles": [1, "data", null, "metadata"]});
    let asset = Asset::new("x", &value).unwrap();
    assert_eq!(asset.roles().collect::<Vec<_>>(), vec!["data", "metadata"]);
    assert!(asset.has_role("metadata"));
    assert!(!asset.has_role("thumbnail"));
}

#[test]
fn asset_role_overlap() {
    let value = json!({"href": "x", "roles": ["overview"]});
    let asset = Asset::new("x", &value).unwrap();
    assert!(asset.has_any_role(&["thumbnail", "overview"]));
    assert!(!asset.has_any_role(&["thumbnail"]));
    assert!(!asset.has_any_role(&[]));
}
