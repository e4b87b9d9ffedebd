use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{Catalog, CategoryMap, ToolCard};

pub const SERVICE_CARDS_FILENAME: &str = "serviceCards.json";
pub const CATEGORIES_FILENAME: &str = "categories.json";

/// Directory layouts probed under every ancestor of a search root, in order.
const METADATA_LAYOUTS: &[&[&str]] = &[
    &["backend", "metadata"],
    &["metadata"],
    &["frontend", "src", "metadata"],
];

/// How many candidate pairs the "not found" error lists.
const MAX_REPORTED_CANDIDATES: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataPaths {
    pub service_cards: PathBuf,
    pub categories: PathBuf,
}

impl MetadataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            service_cards: dir.join(SERVICE_CARDS_FILENAME),
            categories: dir.join(CATEGORIES_FILENAME),
        }
    }

    fn exists(&self) -> bool {
        self.service_cards.exists() && self.categories.exists()
    }
}

/// Find the first directory holding both metadata files.
///
/// `override_dir` (from `TOOL_METADATA_DIR`) is tried first. After that each
/// layout is probed under every ancestor of every search root.
pub fn resolve_metadata_paths(
    override_dir: Option<&Path>,
    search_roots: &[PathBuf],
) -> Result<MetadataPaths> {
    let mut candidates: Vec<MetadataPaths> = Vec::new();

    if let Some(dir) = override_dir {
        candidates.push(MetadataPaths::in_dir(dir));
    }
    for root in search_roots {
        for layout in METADATA_LAYOUTS {
            for ancestor in root.ancestors() {
                let dir = layout.iter().fold(ancestor.to_path_buf(), |p, part| p.join(part));
                let pair = MetadataPaths::in_dir(&dir);
                if !candidates.contains(&pair) {
                    candidates.push(pair);
                }
            }
        }
    }

    if let Some(found) = candidates.iter().find(|c| c.exists()) {
        debug!(cards = %found.service_cards.display(), "Resolved tool metadata");
        return Ok(found.clone());
    }

    let searched = candidates
        .iter()
        .take(MAX_REPORTED_CANDIDATES)
        .map(|c| format!("- {} | {}", c.service_cards.display(), c.categories.display()))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("Could not locate tool metadata files. Searched common locations:\n{searched}")
}

/// Load the active cards and the category map.
pub fn load_catalog(paths: &MetadataPaths) -> Result<Catalog> {
    let raw_cards = read_json_array(&paths.service_cards)?;
    let cards = parse_cards(raw_cards);

    let raw_categories = read_json_array(&paths.categories)?;
    let categories = parse_categories(&raw_categories);

    debug!(
        cards = cards.len(),
        categories = categories.len(),
        "Loaded tool catalog"
    );
    Ok(Catalog::new(cards, categories))
}

fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        _ => bail!("{} must contain a JSON array", path.display()),
    }
}

/// Non-object entries, malformed objects and inactive cards are dropped.
pub(crate) fn parse_cards(raw: Vec<Value>) -> Vec<ToolCard> {
    raw.into_iter()
        .filter(Value::is_object)
        .filter_map(|item| match serde_json::from_value::<ToolCard>(item) {
            Ok(card) => Some(card),
            Err(e) => {
                warn!(error = %e, "Skipping malformed service card");
                None
            }
        })
        .filter(|card| card.is_active)
        .collect()
}

pub(crate) fn parse_categories(raw: &[Value]) -> CategoryMap {
    raw.iter()
        .filter(|item| item.is_object())
        .map(|item| {
            let id = item.get("id").and_then(Value::as_str).unwrap_or("");
            let label = item.get("label").and_then(Value::as_str).unwrap_or("");
            (id, label)
        })
        .collect()
}
