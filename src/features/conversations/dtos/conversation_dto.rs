use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::conversations::models::{ChatMode, Conversation};
use crate::shared::types::{patch_not_null, Patch};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConversationDto {
    pub title: String,

    /// One of `smart_answer`, `group_chat`, `autopilot`; cannot be changed later
    pub mode: ChatMode,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateConversationDto {
    /// New title; omit to only bump `updated_at`. `null` is rejected.
    #[serde(default)]
    #[validate(custom(function = "patch_not_null"))]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConversationResponseDto {
    pub id: i32,
    pub title: String,
    pub mode: ChatMode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationResponseDto {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            title: c.title,
            mode: c.mode,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_accepts_every_mode() {
        for (raw, mode) in [
            ("smart_answer", ChatMode::SmartAnswer),
            ("group_chat", ChatMode::GroupChat),
            ("autopilot", ChatMode::Autopilot),
        ] {
            let dto: CreateConversationDto =
                serde_json::from_value(serde_json::json!({ "title": "Plan", "mode": raw }))
                    .unwrap();
            assert_eq!(dto.mode, mode);
            assert!(dto.validate().is_ok());
        }
    }

    #[test]
    fn test_create_rejects_unknown_mode() {
        let result: Result<CreateConversationDto, _> =
            serde_json::from_value(serde_json::json!({ "title": "Plan", "mode": "chaos" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_accepts_empty_title() {
        let dto: CreateConversationDto =
            serde_json::from_value(serde_json::json!({ "title": "", "mode": "group_chat" }))
                .unwrap();
        assert_eq!(dto.title, "");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_without_title_is_valid() {
        let dto: UpdateConversationDto = serde_json::from_str("{}").unwrap();
        assert!(dto.title.is_unset());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_null_title() {
        let dto: UpdateConversationDto = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(dto.title.is_null());
        assert!(dto.validate().is_err());
    }
}
