use std::collections::HashSet;

use super::NormalizedCard;
use crate::catalog::ToolCard;

/// Ids of cards whose id, path or title literally appears in `query`.
pub fn explicit_tool_ids(query: &str, cards: &[ToolCard]) -> HashSet<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return HashSet::new();
    }

    cards
        .iter()
        .map(NormalizedCard::from)
        .filter(|card| !card.id.is_empty())
        .filter(|card| {
            q.contains(&card.id)
                || (!card.path.is_empty() && q.contains(&card.path))
                || (!card.title.is_empty() && q.contains(&card.title))
        })
        .map(|card| card.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, title: &str, path: &str) -> ToolCard {
        ToolCard {
            id: id.to_string(),
            title: title.to_string(),
            path: path.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_id_title_and_path() {
        let cards = vec![
            card("image-compressor", "Image Compressor", "/tools/image-compressor"),
            card("qr", "Text to QR", "/tools/qr-maker"),
            card("pdf-merge", "PDF Merge", "/tools/pdf-merge"),
        ];

        let by_id = explicit_tool_ids("does image-compressor keep EXIF?", &cards);
        assert_eq!(by_id, HashSet::from(["image-compressor".to_string()]));

        let by_title = explicit_tool_ids("Open TEXT TO QR please", &cards);
        assert!(by_title.contains("qr"));

        let by_path = explicit_tool_ids("I was on /tools/qr-maker", &cards);
        assert!(by_path.contains("qr"));
    }

    #[test]
    fn test_skips_cards_without_id() {
        let cards = vec![card("", "Image Compressor", "/x")];
        assert!(explicit_tool_ids("image compressor", &cards).is_empty());
    }

    #[test]
    fn test_blank_query_is_empty() {
        let cards = vec![card("a", "A", "/a")];
        assert!(explicit_tool_ids("   ", &cards).is_empty());
        assert!(explicit_tool_ids("", &cards).is_empty());
    }

    #[test]
    fn test_empty_title_and_path_never_match() {
        let cards = vec![card("zip-tool", "", "")];
        assert!(explicit_tool_ids("unrelated", &cards).is_empty());
    }
}
