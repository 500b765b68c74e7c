use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::participants::dtos::{
    CreateParticipantDto, ParticipantResponseDto, UpdateParticipantDto,
};
use crate::features::participants::models::Participant;
use sqlx::PgPool;

pub struct ParticipantService {
    pool: PgPool,
}

impl std::fmt::Debug for ParticipantService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticipantService")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl ParticipantService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a participant to a conversation
    pub async fn create(
        &self,
        conversation_id: i32,
        dto: CreateParticipantDto,
    ) -> Result<ParticipantResponseDto> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants
                (conversation_id, name, description, role, avatar_url, ai_model, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, conversation_id, name, description, role, avatar_url,
                      ai_model, is_active, created_at
            "#,
        )
        .bind(conversation_id)
        .bind(&dto.name)
        .bind(dto.description)
        .bind(dto.role)
        .bind(dto.avatar_url)
        .bind(dto.ai_model)
        .bind(dto.is_active.into_option().unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "Participant created: id={}, conversation_id={}, role={}",
            participant.id,
            conversation_id,
            participant.role
        );

        Ok(ParticipantResponseDto::from(participant))
    }

    /// List a conversation's participants in insertion order
    pub async fn list(&self, conversation_id: i32) -> Result<Vec<ParticipantResponseDto>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, conversation_id, name, description, role, avatar_url,
                   ai_model, is_active, created_at
            FROM participants
            WHERE conversation_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(participants
            .into_iter()
            .map(ParticipantResponseDto::from)
            .collect())
    }

    /// Apply a partial update.
    ///
    /// Every column is paired with a "present" flag: when the flag is false the
    /// column keeps its value, otherwise it takes the bound value, which may be
    /// NULL for nullable columns. An update with no fields present returns the
    /// row unchanged.
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateParticipantDto,
    ) -> Result<ParticipantResponseDto> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET name = CASE WHEN $1 THEN $2 ELSE name END,
                description = CASE WHEN $3 THEN $4 ELSE description END,
                role = CASE WHEN $5 THEN $6 ELSE role END,
                avatar_url = CASE WHEN $7 THEN $8 ELSE avatar_url END,
                ai_model = CASE WHEN $9 THEN $10 ELSE ai_model END,
                is_active = CASE WHEN $11 THEN $12 ELSE is_active END
            WHERE id = $13
            RETURNING id, conversation_id, name, description, role, avatar_url,
                      ai_model, is_active, created_at
            "#,
        )
        .bind(dto.name.is_present())
        .bind(dto.name.into_option())
        .bind(dto.description.is_present())
        .bind(dto.description.into_option())
        .bind(dto.role.is_present())
        .bind(dto.role.into_option())
        .bind(dto.avatar_url.is_present())
        .bind(dto.avatar_url.into_option())
        .bind(dto.ai_model.is_present())
        .bind(dto.ai_model.into_option())
        .bind(dto.is_active.is_present())
        .bind(dto.is_active.into_option())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?
        .ok_or_else(|| AppError::NotFound(format!("Participant with id {} not found", id)))?;

        tracing::debug!("Participant updated: id={}", id);

        Ok(ParticipantResponseDto::from(participant))
    }

    /// Remove a participant. Messages it authored stay, with `participant_id`
    /// cleared by the foreign key. Deleting an unknown id succeeds.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::info!(
            "Participant delete: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );

        Ok(())
    }
}
