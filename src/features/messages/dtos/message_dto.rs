use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::messages::models::{Message, MessageRole};
use crate::shared::AiModel;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMessageDto {
    pub role: MessageRole,

    pub content: String,

    /// Model the message is attributed to, if any
    pub ai_model: Option<AiModel>,

    /// Authoring participant; must belong to an existing participant row
    pub participant_id: Option<i32>,
}

// Query params for listing messages
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MessageQueryParams {
    /// Maximum number of messages to return
    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    #[param(minimum = 1)]
    pub limit: Option<i64>,

    /// Number of newest messages to skip
    #[validate(range(min = 0, message = "offset must not be negative"))]
    #[param(minimum = 0)]
    pub offset: Option<i64>,
}

// Response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponseDto {
    pub id: i32,
    pub conversation_id: i32,
    pub role: MessageRole,
    pub content: String,
    pub ai_model: Option<AiModel>,
    pub participant_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponseDto {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            conversation_id: m.conversation_id,
            role: m.role,
            content: m.content,
            ai_model: m.ai_model,
            participant_id: m.participant_id,
            created_at: m.created_at,
        }
    }
}
