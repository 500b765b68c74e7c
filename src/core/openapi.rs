use utoipa::{Modify, OpenApi};

use crate::features::conversations::{
    dtos as conversations_dtos, handlers as conversations_handlers,
    models as conversations_models,
};
use crate::features::file_uploads::{dtos as file_uploads_dtos, handlers as file_uploads_handlers};
use crate::features::health;
use crate::features::messages::{
    dtos as messages_dtos, handlers as messages_handlers, models as messages_models,
};
use crate::features::participants::{
    dtos as participants_dtos, handlers as participants_handlers, models as participants_models,
};
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::AiModel;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Conversations
        conversations_handlers::conversation_handler::create_conversation,
        conversations_handlers::conversation_handler::list_conversations,
        conversations_handlers::conversation_handler::get_conversation,
        conversations_handlers::conversation_handler::update_conversation,
        conversations_handlers::conversation_handler::delete_conversation,
        // Messages
        messages_handlers::message_handler::create_message,
        messages_handlers::message_handler::list_messages,
        // Participants
        participants_handlers::participant_handler::create_participant,
        participants_handlers::participant_handler::list_participants,
        participants_handlers::participant_handler::update_participant,
        participants_handlers::participant_handler::delete_participant,
        // File uploads
        file_uploads_handlers::file_upload_handler::create_file_upload,
    ),
    components(
        schemas(
            // Shared
            Meta,
            AiModel,
            health::HealthResponseDto,
            ApiResponse<health::HealthResponseDto>,
            // Conversations
            conversations_models::ChatMode,
            conversations_dtos::CreateConversationDto,
            conversations_dtos::UpdateConversationDto,
            conversations_dtos::ConversationResponseDto,
            ApiResponse<conversations_dtos::ConversationResponseDto>,
            ApiResponse<Vec<conversations_dtos::ConversationResponseDto>>,
            // Messages
            messages_models::MessageRole,
            messages_dtos::CreateMessageDto,
            messages_dtos::MessageResponseDto,
            ApiResponse<messages_dtos::MessageResponseDto>,
            ApiResponse<Vec<messages_dtos::MessageResponseDto>>,
            // Participants
            participants_models::ParticipantRole,
            participants_dtos::CreateParticipantDto,
            participants_dtos::UpdateParticipantDto,
            participants_dtos::ParticipantResponseDto,
            ApiResponse<participants_dtos::ParticipantResponseDto>,
            ApiResponse<Vec<participants_dtos::ParticipantResponseDto>>,
            // File uploads
            file_uploads_dtos::CreateFileUploadDto,
            file_uploads_dtos::FileUploadResponseDto,
            ApiResponse<file_uploads_dtos::FileUploadResponseDto>,
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "conversations", description = "Chat conversations (smart answer, group chat, autopilot)"),
        (name = "messages", description = "Append-only message history of a conversation"),
        (name = "participants", description = "Actors taking part in a conversation"),
        (name = "file-uploads", description = "Metadata of files attached to a conversation"),
    ),
    info(
        title = "Chat Core API",
        version = "0.1.0",
        description = "API documentation for Chat Core",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
