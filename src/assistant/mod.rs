//! Everything around the model call: prompt assembly, history hygiene,
//! the OpenAI client and the metadata-only fallback answer.

pub mod fallback;
pub mod history;
pub mod llm;
pub mod prompt;

pub use fallback::{fallback_answer, is_degenerate_answer};
pub use history::{parse_history, sanitize_history, HistoryItem};
pub use llm::OpenAiClient;
pub use prompt::{build_user_prompt, SYSTEM_PROMPT};
