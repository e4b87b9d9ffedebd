use crate::catalog::{CategoryMap, ToolCard};

pub const UNKNOWN_TOOL_TITLE: &str = "Unknown tool";
pub const UNKNOWN_CATEGORY_LABEL: &str = "Unknown";

/// Render the selected cards as the metadata block of the user prompt.
///
/// One block per card, joined with `\n`:
///
/// ```text
/// - {title} (id: {id}, category: {label}, path: {path})
///   Short: {description}
///   Details: {detailed}
///   Offline: {yes|no}, Auth required: {yes|no}
/// ```
pub fn render_context(selected: &[&ToolCard], categories: &CategoryMap) -> String {
    selected
        .iter()
        .map(|card| render_card(card, &category_label(card, categories)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mapped label, else the raw category id, else "Unknown".
pub fn category_label(card: &ToolCard, categories: &CategoryMap) -> String {
    let category_id = card.category_id.trim().to_lowercase();
    match categories.label_for(&category_id) {
        Some(label) => label.to_string(),
        None if category_id.is_empty() => UNKNOWN_CATEGORY_LABEL.to_string(),
        None => category_id,
    }
}

fn render_card(card: &ToolCard, category_label: &str) -> String {
    let title = if card.title.is_empty() {
        UNKNOWN_TOOL_TITLE
    } else {
        card.title.as_str()
    };
    format!(
        "- {title} (id: {id}, category: {category_label}, path: {path})\n  Short: {description}\n  Details: {detailed}\n  Offline: {offline}, Auth required: {auth}",
        id = card.id,
        path = card.path,
        description = card.description,
        detailed = card.detailed_description,
        offline = yes_no(card.offline_enabled),
        auth = yes_no(card.auth_required),
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
