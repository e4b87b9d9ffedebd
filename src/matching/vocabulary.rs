//! Word lists that drive tokenization, intent detection and list selection.

use std::collections::HashSet;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "be", "can", "for", "from", "how", "i", "in", "is", "me", "of",
    "on", "please", "that", "the", "to", "what", "which", "with", "you",
];

const LIST_INTENT_TOKENS: &[&str] = &[
    "all",
    "category",
    "categories",
    "list",
    "name",
    "names",
    "related",
    "tool",
    "tools",
];

const MULTI_TOOL_PHRASES: &[&str] = &[
    "all tools",
    "list tools",
    "list of tools",
    "names of tools",
    "which tools",
    "what tools",
    "what are the tools",
];

const OFFLINE_PHRASES: &[&str] = &[
    "offline",
    "without internet",
    "no internet",
    "without a connection",
];

/// Tokens whose presence alone marks a query as being about tools.
pub const TOOL_WORDS: [&str; 2] = ["tool", "tools"];

/// Vocabulary owned by a [`super::ContextBuilder`].
///
/// `Default` yields the tables the scoring thresholds were tuned against.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub stop_words: HashSet<String>,
    pub list_intent_tokens: HashSet<String>,
    pub multi_tool_phrases: Vec<String>,
    pub all_tools_phrase: String,
    pub offline_phrases: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            stop_words: owned_set(STOP_WORDS),
            list_intent_tokens: owned_set(LIST_INTENT_TOKENS),
            multi_tool_phrases: owned_vec(MULTI_TOOL_PHRASES),
            all_tools_phrase: "all tools".to_string(),
            offline_phrases: owned_vec(OFFLINE_PHRASES),
        }
    }
}

impl Vocabulary {
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn is_list_intent(&self, token: &str) -> bool {
        self.list_intent_tokens.contains(token)
    }
}

fn owned_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn owned_vec(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
