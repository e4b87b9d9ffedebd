pub const SYSTEM_PROMPT: &str = "You are the Tool Assistant for this site.\n\
Only explain tools based on the provided metadata context.\n\
Use clear, helpful language.\n\
If the user asks for a list/category, return all matching tool names as bullets.\n\
If user intent is unclear, ask one short clarifying question.\n\
Do not invent features that are not in the context.";

pub const NO_HISTORY_TEXT: &str = "No previous chat history.";
pub const NONE_TOOL_ID_TEXT: &str = "none";

/// User-turn prompt: question, current page, recent history, tool metadata.
pub fn build_user_prompt(
    message: &str,
    current_tool_id: Option<&str>,
    history: &[String],
    context_text: &str,
) -> String {
    let history_block = if history.is_empty() {
        NO_HISTORY_TEXT.to_string()
    } else {
        history.join("\n")
    };
    let current = current_tool_id
        .filter(|id| !id.is_empty())
        .unwrap_or(NONE_TOOL_ID_TEXT);

    format!(
        "User question:\n{message}\n\n\
         Current tool id (if any): {current}\n\n\
         Recent chat history:\n{history_block}\n\n\
         Relevant tool metadata:\n{context_text}"
    )
}
