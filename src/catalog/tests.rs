use super::loader::{parse_cards, parse_categories};
use super::*;
use serde_json::json;
use std::fs;

fn write_metadata(dir: &std::path::Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("serviceCards.json"),
        json!([
            {"id": "image-compressor", "title": "Image Compressor", "categoryId": "images"},
            {"id": "retired", "title": "Retired", "isActive": false},
            "not a card",
            {"id": "text-to-qr", "title": "Text to QR", "isActive": null}
        ])
        .to_string(),
    )
    .unwrap();
    fs::write(
        dir.join("categories.json"),
        json!([{"id": " Images ", "label": " Image tools "}, 42]).to_string(),
    )
    .unwrap();
}

#[test]
fn test_tool_card_defaults_missing_and_null_fields() {
    let card: ToolCard = serde_json::from_value(json!({
        "id": "pdf-merge",
        "title": null,
        "offlineEnabled": true
    }))
    .unwrap();
    assert_eq!(card.id, "pdf-merge");
    assert_eq!(card.title, "");
    assert_eq!(card.detailed_description, "");
    assert!(card.offline_enabled);
    assert!(!card.auth_required);
    assert!(card.is_active);
}

#[test]
fn test_parse_cards_skips_inactive_and_non_objects() {
    let cards = parse_cards(vec![
        json!({"id": "a"}),
        json!({"id": "b", "isActive": false}),
        json!(["nested"]),
        json!({"id": "c", "isActive": true}),
        json!({"id": 7}),
    ]);
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_parse_cards_keeps_loosely_typed_flags() {
    let cards = parse_cards(vec![
        json!({"id": "a", "offlineEnabled": 1}),
        json!({"id": "b", "authRequired": "yes"}),
        json!({"id": "c", "isActive": "false"}),
        json!({"id": "d", "offlineEnabled": 0, "authRequired": "", "isActive": 0}),
    ]);
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
    assert!(cards[0].offline_enabled);
    assert!(cards[1].auth_required);
    assert!(cards[2].is_active);
    assert!(!cards[3].offline_enabled);
    assert!(!cards[3].auth_required);
}

#[test]
fn test_parse_categories_normalizes_keys() {
    let map = parse_categories(&[
        json!({"id": "Images", "label": " Image tools "}),
        json!({"label": "orphan"}),
        json!("junk"),
    ]);
    assert_eq!(map.label_for("images"), Some("Image tools"));
    assert_eq!(map.label_for(" IMAGES"), Some("Image tools"));
    assert_eq!(map.label_for(""), Some("orphan"));
    assert_eq!(map.label_for("missing"), None);
}

#[test]
fn test_resolve_prefers_override_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let override_dir = tmp.path().join("custom");
    write_metadata(&override_dir);
    write_metadata(&tmp.path().join("metadata"));

    let roots = [tmp.path().to_path_buf()];
    let paths = resolve_metadata_paths(Some(override_dir.as_path()), &roots).unwrap();
    assert_eq!(paths, MetadataPaths::in_dir(&override_dir));
}

#[test]
fn test_resolve_walks_ancestors() {
    let tmp = tempfile::tempdir().unwrap();
    write_metadata(&tmp.path().join("frontend").join("src").join("metadata"));
    let nested = tmp.path().join("backend").join("api").join("views");
    fs::create_dir_all(&nested).unwrap();

    let paths = resolve_metadata_paths(None, &[nested]).unwrap();
    assert_eq!(
        paths,
        MetadataPaths::in_dir(&tmp.path().join("frontend").join("src").join("metadata"))
    );
}

#[test]
fn test_resolve_backend_layout_beats_frontend() {
    let tmp = tempfile::tempdir().unwrap();
    write_metadata(&tmp.path().join("frontend").join("src").join("metadata"));
    write_metadata(&tmp.path().join("backend").join("metadata"));

    let paths = resolve_metadata_paths(None, &[tmp.path().to_path_buf()]).unwrap();
    assert_eq!(
        paths,
        MetadataPaths::in_dir(&tmp.path().join("backend").join("metadata"))
    );
}

#[test]
fn test_resolve_requires_both_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("metadata");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("serviceCards.json"), "[]").unwrap();

    let err = resolve_metadata_paths(Some(dir.as_path()), &[]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Could not locate tool metadata files."));
    assert!(msg.contains("serviceCards.json"));
}

#[test]
fn test_load_catalog_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    write_metadata(tmp.path());

    let catalog = load_catalog(&MetadataPaths::in_dir(tmp.path())).unwrap();
    let ids: Vec<&str> = catalog.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["image-compressor", "text-to-qr"]);
    assert_eq!(catalog.categories.label_for("images"), Some("Image tools"));
}

#[test]
fn test_load_catalog_rejects_non_array() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("serviceCards.json"), "{}").unwrap();
    fs::write(tmp.path().join("categories.json"), "[]").unwrap();

    let err = load_catalog(&MetadataPaths::in_dir(tmp.path())).unwrap_err();
    assert!(err.to_string().contains("must contain a JSON array"));
}
