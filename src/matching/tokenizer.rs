use regex::Regex;
use std::sync::LazyLock;

use super::vocabulary::Vocabulary;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9_]+").unwrap());

/// Lower-case `text` and split it into `[a-z0-9_]+` runs.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens worth matching on: at least two characters and not a stop word.
pub fn signal_tokens(text: &str, vocab: &Vocabulary) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.len() >= 2 && !vocab.is_stop_word(t))
        .collect()
}
