use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

use crate::shared::AiModel;

/// Participant role enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "participant_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    User,
    Assistant,
    Moderator,
    Expert,
    Analyst,
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantRole::User => write!(f, "user"),
            ParticipantRole::Assistant => write!(f, "assistant"),
            ParticipantRole::Moderator => write!(f, "moderator"),
            ParticipantRole::Expert => write!(f, "expert"),
            ParticipantRole::Analyst => write!(f, "analyst"),
        }
    }
}

/// Database model for participant
#[derive(Debug, Clone, FromRow)]
pub struct Participant {
    pub id: i32,
    pub conversation_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub role: ParticipantRole,
    pub avatar_url: Option<String>,
    pub ai_model: Option<AiModel>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
