use crate::catalog::ToolCard;

pub const FALLBACK_NO_TOOL: &str = "I can explain any tool on this site. Tell me the tool name or open a tool page, and I will give a short summary.";

/// Detailed descriptions are cut to this many characters when they stand in
/// for a missing short description.
const DETAILED_PREVIEW_CHARS: usize = 220;
/// Answers with fewer words than this are replaced by the fallback.
const MIN_ANSWER_WORDS: usize = 3;

/// Deterministic answer built from card metadata alone.
pub fn fallback_answer(tool: Option<&ToolCard>) -> String {
    let Some(tool) = tool else {
        return FALLBACK_NO_TOOL.to_string();
    };

    let title = match tool.title.trim() {
        "" => "This tool",
        t => t,
    };
    let detailed = tool.detailed_description.trim();
    let description = match tool.description.trim() {
        "" if !detailed.is_empty() => detailed
            .chars()
            .take(DETAILED_PREVIEW_CHARS)
            .collect::<String>()
            .trim_end()
            .to_string(),
        d => d.to_string(),
    };
    let auth_text = if tool.auth_required {
        "requires login"
    } else {
        "does not require login"
    };
    let offline_text = if tool.offline_enabled {
        "works offline after initial load"
    } else {
        "needs internet access"
    };
    let path = tool.path.trim();

    format!("{title}: {description} It {auth_text}, {offline_text}, and is available at {path}.")
        .trim()
        .to_string()
}

/// Empty or near-empty model output.
pub fn is_degenerate_answer(answer: &str) -> bool {
    answer.split_whitespace().count() < MIN_ANSWER_WORDS
}
