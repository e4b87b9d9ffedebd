//! Context selection for the tool assistant.
//!
//! Pipeline per request: explicit mentions → per-card scoring → ranking →
//! intent-driven selection → text rendering. Everything here is pure and
//! synchronous over an immutable [`Catalog`].

pub mod explicit;
pub mod intent;
pub mod render;
pub mod scoring;
pub mod selection;
pub mod tokenizer;
pub mod vocabulary;

use tracing::debug;

use crate::catalog::{Catalog, ToolCard};

pub use explicit::explicit_tool_ids;
pub use intent::{is_multi_tool_request, is_offline_list_request};
pub use render::render_context;
pub use scoring::{rank, score_tool, ScoreContext, ScoredCandidate};
pub use selection::{best_match, select};
pub use vocabulary::Vocabulary;

/// Trimmed, lower-cased view of the text fields of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub detailed: String,
    pub path: String,
    pub category_id: String,
}

impl NormalizedCard {
    /// All five descriptive fields joined by spaces.
    pub fn text_blob(&self) -> String {
        [
            self.id.as_str(),
            self.title.as_str(),
            self.description.as_str(),
            self.detailed.as_str(),
            self.path.as_str(),
        ]
        .join(" ")
    }
}

impl From<&ToolCard> for NormalizedCard {
    fn from(card: &ToolCard) -> Self {
        let norm = |s: &str| s.trim().to_lowercase();
        Self {
            id: norm(&card.id),
            title: norm(&card.title),
            description: norm(&card.description),
            detailed: norm(&card.detailed_description),
            path: norm(&card.path),
            category_id: norm(&card.category_id),
        }
    }
}

/// Output of one pass over the catalog.
#[derive(Debug, Clone)]
pub struct BuiltContext<'a> {
    pub context_text: String,
    pub selected: Vec<&'a ToolCard>,
    /// Top-ranked card when its score is above zero.
    pub matched_tool: Option<&'a ToolCard>,
}

/// Runs the selection pipeline with a fixed [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    vocab: Vocabulary,
}

impl ContextBuilder {
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    pub fn build<'a>(
        &self,
        catalog: &'a Catalog,
        query: &str,
        current_tool_id: Option<&str>,
    ) -> BuiltContext<'a> {
        let explicit_ids = explicit_tool_ids(query, &catalog.cards);
        let ctx = ScoreContext::new(query, current_tool_id, &explicit_ids, &self.vocab);
        let ranked = rank(&catalog.cards, &ctx);

        let selected = select(
            &catalog.cards,
            &catalog.categories,
            query,
            &ranked,
            &explicit_ids,
            &self.vocab,
        );
        let matched_tool = best_match(&ranked);

        debug!(
            explicit = explicit_ids.len(),
            selected = selected.len(),
            top_score = ranked.first().map(|s| s.score).unwrap_or(0.0),
            matched = matched_tool.map(|c| c.id.as_str()).unwrap_or("none"),
            "Built tool context"
        );

        BuiltContext {
            context_text: render_context(&selected, &catalog.categories),
            selected,
            matched_tool,
        }
    }
}
