use std::collections::HashSet;

use super::intent::{is_multi_tool_request, is_offline_list_request};
use super::scoring::ScoredCandidate;
use super::tokenizer::signal_tokens;
use super::vocabulary::Vocabulary;
use super::NormalizedCard;
use crate::catalog::{CategoryMap, ToolCard};

/// Minimum top score for a single-tool answer.
pub const SINGLE_MATCH_THRESHOLD: f64 = 2.0;
/// Cards kept when no single card is strong enough, and the no-signal default.
pub const WEAK_MATCH_LIMIT: usize = 3;
/// Cap for list fallbacks.
pub const LIST_FALLBACK_LIMIT: usize = 5;

/// Pick the cards to describe. `scored` must already be ranked.
pub fn select<'a>(
    cards: &'a [ToolCard],
    categories: &CategoryMap,
    query: &str,
    scored: &[ScoredCandidate<'a>],
    explicit_ids: &HashSet<String>,
    vocab: &Vocabulary,
) -> Vec<&'a ToolCard> {
    if is_multi_tool_request(query, vocab) {
        return select_for_list(cards, categories, query, scored, explicit_ids, vocab);
    }

    match scored.first() {
        Some(best) if best.score >= SINGLE_MATCH_THRESHOLD => vec![best.card],
        _ => {
            let top: Vec<&'a ToolCard> = positive(scored).take(WEAK_MATCH_LIMIT).collect();
            if top.is_empty() {
                cards.iter().take(WEAK_MATCH_LIMIT).collect()
            } else {
                top
            }
        }
    }
}

/// Selection for "list several tools" queries.
pub fn select_for_list<'a>(
    cards: &'a [ToolCard],
    categories: &CategoryMap,
    query: &str,
    scored: &[ScoredCandidate<'a>],
    explicit_ids: &HashSet<String>,
    vocab: &Vocabulary,
) -> Vec<&'a ToolCard> {
    let q = query.trim().to_lowercase();
    if cards.is_empty() {
        return Vec::new();
    }

    if q.contains(vocab.all_tools_phrase.as_str()) {
        return cards.iter().collect();
    }

    if is_offline_list_request(&q, vocab) {
        let offline: Vec<&'a ToolCard> = cards.iter().filter(|c| c.offline_enabled).collect();
        return if offline.is_empty() {
            cards.iter().take(LIST_FALLBACK_LIMIT).collect()
        } else {
            offline
        };
    }

    let focus_tokens: HashSet<String> = signal_tokens(&q, vocab)
        .into_iter()
        .filter(|t| !vocab.is_list_intent(t))
        .collect();

    let related: Vec<&'a ToolCard> = positive(scored)
        .filter(|card| {
            let normalized = NormalizedCard::from(*card);
            let explicit_match = !normalized.id.is_empty() && explicit_ids.contains(&normalized.id);
            if explicit_match {
                return true;
            }
            let searchable = searchable_text(&normalized, categories);
            focus_tokens
                .iter()
                .any(|token| searchable.contains(token.as_str()))
        })
        .collect();

    if !related.is_empty() {
        return related;
    }

    let fallback: Vec<&'a ToolCard> = positive(scored).take(LIST_FALLBACK_LIMIT).collect();
    if fallback.is_empty() {
        cards.iter().take(LIST_FALLBACK_LIMIT).collect()
    } else {
        fallback
    }
}

/// Highest-scoring card, if anything scored at all.
pub fn best_match<'a>(scored: &[ScoredCandidate<'a>]) -> Option<&'a ToolCard> {
    scored
        .first()
        .filter(|best| best.score > 0.0)
        .map(|best| best.card)
}

fn positive<'s, 'a>(
    scored: &'s [ScoredCandidate<'a>],
) -> impl Iterator<Item = &'a ToolCard> + 's {
    scored.iter().filter(|s| s.score > 0.0).map(|s| s.card)
}

fn searchable_text(card: &NormalizedCard, categories: &CategoryMap) -> String {
    let label = categories
        .label_for(&card.category_id)
        .unwrap_or("")
        .trim()
        .to_lowercase();
    [
        card.id.as_str(),
        card.title.as_str(),
        card.description.as_str(),
        card.path.as_str(),
        card.category_id.as_str(),
        label.as_str(),
    ]
    .join(" ")
}
