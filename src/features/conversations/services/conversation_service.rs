use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::conversations::dtos::{
    ConversationResponseDto, CreateConversationDto, UpdateConversationDto,
};
use crate::features::conversations::models::Conversation;
use sqlx::PgPool;

pub struct ConversationService {
    pool: PgPool,
}

impl std::fmt::Debug for ConversationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationService")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl ConversationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new conversation; id and timestamps are assigned by the database
    pub async fn create(&self, dto: CreateConversationDto) -> Result<ConversationResponseDto> {
        let conversation = sqlx::query_as::<_, Conversation>(
            r#"
            INSERT INTO conversations (title, mode)
            VALUES ($1, $2)
            RETURNING id, title, mode, created_at, updated_at
            "#,
        )
        .bind(&dto.title)
        .bind(dto.mode)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "Conversation created: id={}, mode={}",
            conversation.id,
            conversation.mode
        );

        Ok(ConversationResponseDto::from(conversation))
    }

    /// Get conversation by ID. A missing row is `None`, not an error.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ConversationResponseDto>> {
        let conversation = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id, title, mode, created_at, updated_at
            FROM conversations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(conversation.map(ConversationResponseDto::from))
    }

    /// List every conversation, most recently touched first
    pub async fn list_all(&self) -> Result<Vec<ConversationResponseDto>> {
        let conversations = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id, title, mode, created_at, updated_at
            FROM conversations
            ORDER BY updated_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(conversations
            .into_iter()
            .map(ConversationResponseDto::from)
            .collect())
    }

    /// Update title (when present); `updated_at` is always bumped
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateConversationDto,
    ) -> Result<ConversationResponseDto> {
        let conversation = sqlx::query_as::<_, Conversation>(
            r#"
            UPDATE conversations
            SET title = CASE WHEN $1 THEN $2 ELSE title END,
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, title, mode, created_at, updated_at
            "#,
        )
        .bind(dto.title.is_present())
        .bind(dto.title.into_option())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?
        .ok_or_else(|| AppError::NotFound(format!("Conversation with id {} not found", id)))?;

        tracing::debug!("Conversation updated: id={}", id);

        Ok(ConversationResponseDto::from(conversation))
    }

    /// Delete a conversation together with its messages, participants and file
    /// uploads. Deleting an unknown id succeeds.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::info!(
            "Conversation delete: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );

        Ok(())
    }
}
