//! Additive relevance scoring of one card against one query.
//!
//! A score is an ordered fold of [`SCORE_RULES`] over an accumulator that
//! starts at `0.0`. Selection thresholds (`>= 2.0` for a single-tool answer,
//! `> 0.0` for any signal) are calibrated against these exact weights.

use std::collections::HashSet;

use super::tokenizer::signal_tokens;
use super::vocabulary::Vocabulary;
use super::NormalizedCard;
use crate::catalog::ToolCard;

pub const EXPLICIT_MENTION_WEIGHT: f64 = 10.0;
pub const CURRENT_PAGE_WEIGHT: f64 = 3.0;
pub const LITERAL_ID_WEIGHT: f64 = 6.0;
pub const LITERAL_TITLE_WEIGHT: f64 = 5.0;
pub const LITERAL_PATH_WEIGHT: f64 = 4.0;
pub const TOKEN_IN_ID_WEIGHT: f64 = 2.0;
pub const TOKEN_IN_TITLE_WEIGHT: f64 = 1.8;
pub const TOKEN_IN_DESCRIPTION_WEIGHT: f64 = 1.3;
pub const TOKEN_IN_DETAILED_WEIGHT: f64 = 1.0;
pub const TOKEN_IN_ANY_FIELD_WEIGHT: f64 = 0.4;

/// Per-request inputs shared by every rule.
#[derive(Debug, Clone)]
pub struct ScoreContext<'a> {
    /// Lower-cased query, untrimmed.
    pub query: String,
    /// Trimmed, lower-cased id of the page the user is on, if any.
    pub current_tool_id: Option<String>,
    pub explicit_ids: &'a HashSet<String>,
    pub signal_tokens: Vec<String>,
}

impl<'a> ScoreContext<'a> {
    pub fn new(
        query: &str,
        current_tool_id: Option<&str>,
        explicit_ids: &'a HashSet<String>,
        vocab: &Vocabulary,
    ) -> Self {
        let query = query.to_lowercase();
        let signal_tokens = signal_tokens(&query, vocab);
        let current_tool_id = current_tool_id
            .map(|id| id.trim().to_lowercase())
            .filter(|id| !id.is_empty());
        Self {
            query,
            current_tool_id,
            explicit_ids,
            signal_tokens,
        }
    }
}

pub type ScoreRule = fn(f64, &NormalizedCard, &ScoreContext<'_>) -> f64;

pub const SCORE_RULES: &[ScoreRule] = &[
    explicit_mention,
    current_page_bias,
    literal_mentions,
    token_overlap,
];

pub fn explicit_mention(score: f64, card: &NormalizedCard, ctx: &ScoreContext<'_>) -> f64 {
    if !card.id.is_empty() && ctx.explicit_ids.contains(&card.id) {
        score + EXPLICIT_MENTION_WEIGHT
    } else {
        score
    }
}

/// Favors the page being viewed unless the query names a different tool.
pub fn current_page_bias(score: f64, card: &NormalizedCard, ctx: &ScoreContext<'_>) -> f64 {
    let Some(current) = ctx.current_tool_id.as_deref() else {
        return score;
    };
    if card.id == current && (ctx.explicit_ids.is_empty() || ctx.explicit_ids.contains(current))
    {
        score + CURRENT_PAGE_WEIGHT
    } else {
        score
    }
}

pub fn literal_mentions(mut score: f64, card: &NormalizedCard, ctx: &ScoreContext<'_>) -> f64 {
    if !card.id.is_empty() && ctx.query.contains(&card.id) {
        score += LITERAL_ID_WEIGHT;
    }
    if !card.title.is_empty() && ctx.query.contains(&card.title) {
        score += LITERAL_TITLE_WEIGHT;
    }
    if !card.path.is_empty() && ctx.query.contains(&card.path) {
        score += LITERAL_PATH_WEIGHT;
    }
    score
}

/// Per signal token: field-specific hits plus a catch-all hit on the joined
/// text. The catch-all stacks with the specific ones.
pub fn token_overlap(mut score: f64, card: &NormalizedCard, ctx: &ScoreContext<'_>) -> f64 {
    let blob = card.text_blob();
    for token in &ctx.signal_tokens {
        let token = token.as_str();
        if card.id.contains(token) {
            score += TOKEN_IN_ID_WEIGHT;
        }
        if card.title.contains(token) {
            score += TOKEN_IN_TITLE_WEIGHT;
        }
        if card.description.contains(token) {
            score += TOKEN_IN_DESCRIPTION_WEIGHT;
        }
        if card.detailed.contains(token) {
            score += TOKEN_IN_DETAILED_WEIGHT;
        }
        if blob.contains(token) {
            score += TOKEN_IN_ANY_FIELD_WEIGHT;
        }
    }
    score
}

pub fn score_tool(card: &ToolCard, ctx: &ScoreContext<'_>) -> f64 {
    let normalized = NormalizedCard::from(card);
    SCORE_RULES
        .iter()
        .fold(0.0, |acc, rule| rule(acc, &normalized, ctx))
}

/// A card paired with its score for the current request.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub score: f64,
    pub card: &'a ToolCard,
}

/// Score every card and sort by descending score. Ties keep catalog order.
pub fn rank<'a>(cards: &'a [ToolCard], ctx: &ScoreContext<'_>) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = cards
        .iter()
        .map(|card| ScoredCandidate {
            score: score_tool(card, ctx),
            card,
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
