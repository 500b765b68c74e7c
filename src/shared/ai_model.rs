use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// AI model tag attached to messages and participants, matching database enum.
/// Only recorded; no model is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "ai_model", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AiModel {
    Chatgpt,
    Gemini,
    Deepseek,
    Grok,
}

impl std::fmt::Display for AiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiModel::Chatgpt => write!(f, "chatgpt"),
            AiModel::Gemini => write!(f, "gemini"),
            AiModel::Deepseek => write!(f, "deepseek"),
            AiModel::Grok => write!(f, "grok"),
        }
    }
}
