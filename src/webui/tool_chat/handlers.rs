use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use crate::assistant::{
    build_user_prompt, fallback_answer, is_degenerate_answer, parse_history, sanitize_history,
    SYSTEM_PROMPT,
};
use crate::webui::error::{ApiError, ApiResult};
use crate::webui::extractors::ValidJson;

use super::dto::{ToolChatRequest, ToolChatResponse};
use super::ChatState;

pub const ERROR_MESSAGE_REQUIRED: &str = "message is required";
pub const ERROR_METADATA_UNAVAILABLE: &str = "Tool metadata is unavailable.";

/// POST /api/tool-chat
pub async fn tool_chat(
    State(state): State<ChatState>,
    ValidJson(body): ValidJson<ToolChatRequest>,
) -> ApiResult<Json<ToolChatResponse>> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest(ERROR_MESSAGE_REQUIRED.to_string()));
    }
    let current_tool_id = body
        .current_tool_id
        .as_deref()
        .map(|id| id.trim().to_lowercase())
        .filter(|id| !id.is_empty());
    let history = sanitize_history(&parse_history(&body.history));

    let catalog = state
        .load_catalog()
        .map_err(|e| ApiError::unavailable(ERROR_METADATA_UNAVAILABLE, &e, state.config.debug))?;

    let built = state
        .builder
        .build(&catalog, message, current_tool_id.as_deref());
    let matched_tool_id = built.matched_tool.map(|card| card.id.clone());
    let fallback = || fallback_answer(built.matched_tool);

    let Some(client) = state.llm.as_ref() else {
        debug!("No API key configured, answering from metadata");
        return Ok(Json(ToolChatResponse {
            answer: fallback(),
            matched_tool_id,
            model: None,
            fallback: true,
        }));
    };

    let model = state.config.openai_model.clone();
    let user_prompt = build_user_prompt(
        message,
        current_tool_id.as_deref(),
        &history,
        &built.context_text,
    );

    let (answer, used_fallback) = match client.respond(&model, SYSTEM_PROMPT, &user_prompt).await {
        Ok(answer) if !is_degenerate_answer(&answer) => (answer, false),
        Ok(answer) => {
            info!(words = answer.split_whitespace().count(), "Model answer too short, using fallback");
            (fallback(), true)
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), %model, "Assistant request failed, using fallback");
            (fallback(), true)
        }
    };

    Ok(Json(ToolChatResponse {
        answer,
        matched_tool_id,
        model: Some(model),
        fallback: used_fallback,
    }))
}
