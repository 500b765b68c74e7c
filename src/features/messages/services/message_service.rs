use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::messages::dtos::{CreateMessageDto, MessageQueryParams, MessageResponseDto};
use crate::features::messages::models::Message;
use sqlx::PgPool;

pub struct MessageService {
    pool: PgPool,
}

impl std::fmt::Debug for MessageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageService")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a message to a conversation.
    ///
    /// Fails with `ForeignKeyViolation` when the conversation, or the
    /// participant if one is given, does not exist.
    pub async fn create(
        &self,
        conversation_id: i32,
        dto: CreateMessageDto,
    ) -> Result<MessageResponseDto> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (conversation_id, role, content, ai_model, participant_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, conversation_id, role, content, ai_model, participant_id, created_at
            "#,
        )
        .bind(conversation_id)
        .bind(dto.role)
        .bind(&dto.content)
        .bind(dto.ai_model)
        .bind(dto.participant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::debug!(
            "Message created: id={}, conversation_id={}, role={}",
            message.id,
            conversation_id,
            message.role
        );

        Ok(MessageResponseDto::from(message))
    }

    /// List a conversation's messages, newest first.
    ///
    /// `limit` caps the count and `offset` skips that many of the newest rows;
    /// either may be omitted (`LIMIT NULL` / `OFFSET NULL` mean no bound).
    pub async fn list(
        &self,
        conversation_id: i32,
        params: &MessageQueryParams,
    ) -> Result<Vec<MessageResponseDto>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, conversation_id, role, content, ai_model, participant_id, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(conversation_id)
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(messages.into_iter().map(MessageResponseDto::from).collect())
    }
}
