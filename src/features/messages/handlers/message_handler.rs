use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::messages::dtos::{CreateMessageDto, MessageQueryParams, MessageResponseDto};
use crate::features::messages::services::MessageService;
use crate::shared::types::{ApiResponse, Meta};

/// Post a message to a conversation
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/messages",
    params(
        ("id" = i32, Path, description = "Conversation ID")
    ),
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message created successfully", body = ApiResponse<MessageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Conversation or participant does not exist")
    ),
    tag = "messages"
)]
pub async fn create_message(
    State(service): State<Arc<MessageService>>,
    AppPath(conversation_id): AppPath<i32>,
    AppJson(dto): AppJson<CreateMessageDto>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.create(conversation_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(message), None, None)),
    ))
}

/// List a conversation's messages, newest first
#[utoipa::path(
    get,
    path = "/api/conversations/{id}/messages",
    params(
        ("id" = i32, Path, description = "Conversation ID"),
        MessageQueryParams
    ),
    responses(
        (status = 200, description = "Messages retrieved successfully", body = ApiResponse<Vec<MessageResponseDto>>),
        (status = 400, description = "Invalid limit or offset")
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(service): State<Arc<MessageService>>,
    AppPath(conversation_id): AppPath<i32>,
    AppQuery(params): AppQuery<MessageQueryParams>,
) -> Result<Json<ApiResponse<Vec<MessageResponseDto>>>> {
    params
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let messages = service.list(conversation_id, &params).await?;
    let total = messages.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(messages),
        None,
        Some(Meta { total }),
    )))
}
