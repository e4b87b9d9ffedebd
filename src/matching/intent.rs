use std::collections::HashSet;

use super::tokenizer::tokenize;
use super::vocabulary::{Vocabulary, TOOL_WORDS};

/// True when the query asks for several tools rather than one.
///
/// A listed phrase is enough on its own. Otherwise the query must mention
/// "tool"/"tools" together with some list-intent token.
pub fn is_multi_tool_request(query: &str, vocab: &Vocabulary) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return false;
    }

    if vocab.multi_tool_phrases.iter().any(|p| q.contains(p.as_str())) {
        return true;
    }

    let tokens: HashSet<String> = tokenize(&q).into_iter().collect();
    let has_tool_word = TOOL_WORDS.iter().any(|w| tokens.contains(*w));
    let has_list_intent = tokens.iter().any(|t| vocab.is_list_intent(t));
    has_tool_word && has_list_intent
}

/// A list request restricted to tools that work without a connection.
pub fn is_offline_list_request(query: &str, vocab: &Vocabulary) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() || !is_multi_tool_request(&q, vocab) {
        return false;
    }
    vocab.offline_phrases.iter().any(|p| q.contains(p.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_detection() {
        let vocab = Vocabulary::default();
        assert!(is_multi_tool_request("what are the tools", &vocab));
        assert!(is_multi_tool_request("Show me ALL TOOLS", &vocab));
        assert!(is_multi_tool_request("which tools handle pdf?", &vocab));
    }

    #[test]
    fn test_single_tool_queries() {
        let vocab = Vocabulary::default();
        assert!(!is_multi_tool_request("how do I resize an image", &vocab));
        assert!(!is_multi_tool_request("", &vocab));
        assert!(!is_multi_tool_request("   ", &vocab));
    }

    #[test]
    fn test_token_path_paraphrases() {
        let vocab = Vocabulary::default();
        assert!(is_multi_tool_request("tools related to images", &vocab));
        assert!(is_multi_tool_request("tool categories?", &vocab));
        // "tool" is itself a list-intent token
        assert!(is_multi_tool_request("is there a tool for pdf", &vocab));
    }

    #[test]
    fn test_tool_word_requires_whole_token() {
        let vocab = Vocabulary::default();
        assert!(!is_multi_tool_request("list my toolbox contents", &vocab));
        assert!(!is_multi_tool_request("name every image format", &vocab));
    }

    #[test]
    fn test_offline_list_request() {
        let vocab = Vocabulary::default();
        assert!(is_offline_list_request("which tools work offline", &vocab));
        assert!(is_offline_list_request(
            "list tools usable without internet",
            &vocab
        ));
        assert!(!is_offline_list_request("does this work offline", &vocab));
        assert!(!is_offline_list_request("which tools merge pdf", &vocab));
    }
}
