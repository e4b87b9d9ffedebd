use garde::Validate;
use serde::{Deserialize, Serialize};

/// Longest accepted `message`, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToolChatRequest {
    #[serde(default)]
    #[garde(length(chars, max = MAX_MESSAGE_CHARS))]
    pub message: String,
    /// Id of the tool page the user is viewing.
    #[serde(default)]
    #[garde(skip)]
    pub current_tool_id: Option<String>,
    /// Raw `[{role, content}]` list; malformed entries are dropped later.
    #[serde(default)]
    #[garde(skip)]
    pub history: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolChatResponse {
    pub answer: String,
    pub matched_tool_id: Option<String>,
    pub model: Option<String>,
    /// True when `answer` was built from metadata instead of the model.
    pub fallback: bool,
}
