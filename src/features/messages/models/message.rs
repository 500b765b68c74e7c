use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

use crate::shared::AiModel;

/// Message author role matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "message_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
            MessageRole::System => write!(f, "system"),
        }
    }
}

/// Database model for message. Messages are never updated or deleted
/// individually; `participant_id` is cleared when its participant is deleted.
#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i32,
    pub conversation_id: i32,
    pub role: MessageRole,
    pub content: String,
    pub ai_model: Option<AiModel>,
    pub participant_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
