use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::participants::models::{Participant, ParticipantRole};
use crate::shared::types::{patch_not_null, Patch};
use crate::shared::AiModel;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateParticipantDto {
    pub name: String,

    pub description: Option<String>,

    pub role: ParticipantRole,

    pub avatar_url: Option<String>,

    pub ai_model: Option<AiModel>,

    /// Defaults to `true` when omitted; `null` is rejected
    #[serde(default)]
    #[validate(custom(function = "patch_not_null"))]
    #[schema(value_type = Option<bool>)]
    pub is_active: Patch<bool>,
}

/// Partial update. A key that is absent leaves the column alone, an explicit
/// `null` clears it (only allowed for nullable columns).
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateParticipantDto {
    #[serde(default)]
    #[validate(custom(function = "patch_not_null"))]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,

    #[serde(default)]
    #[validate(custom(function = "patch_not_null"))]
    #[schema(value_type = Option<ParticipantRole>)]
    pub role: Patch<ParticipantRole>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub avatar_url: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<AiModel>)]
    pub ai_model: Patch<AiModel>,

    #[serde(default)]
    #[validate(custom(function = "patch_not_null"))]
    #[schema(value_type = Option<bool>)]
    pub is_active: Patch<bool>,
}

// Response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponseDto {
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

impl From<Participant> for ParticipantResponseDto {
    fn from(p: Participant) -> Self {
        Self {
            id: p.id,
            conversation_id: p.conversation_id,
            name: p.name,
            description: p.description,
            role: p.role,
            avatar_url: p.avatar_url,
            ai_model: p.ai_model,
            is_active: p.is_active,
            created_at: p.created_at,
        }
    }
}
