use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Conversation mode enum matching database enum. Fixed for the lifetime of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "chat_mode", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChatMode {
    /// Single-turn question and answer
    SmartAnswer,
    /// Several participants in one thread
    GroupChat,
    /// Multi-agent task automation
    Autopilot,
}

impl std::fmt::Display for ChatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatMode::SmartAnswer => write!(f, "smart_answer"),
            ChatMode::GroupChat => write!(f, "group_chat"),
            ChatMode::Autopilot => write!(f, "autopilot"),
        }
    }
}

/// Database model for conversation
#[derive(Debug, Clone, FromRow)]
pub struct Conversation {
    pub id: i32,
    pub title: String,
    pub mode: ChatMode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
