use crate::core::error::{handle_db_error, Result};
use crate::features::file_uploads::dtos::{CreateFileUploadDto, FileUploadResponseDto};
use crate::features::file_uploads::models::FileUpload;
use sqlx::PgPool;

pub struct FileUploadService {
    pool: PgPool,
}

impl std::fmt::Debug for FileUploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUploadService")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl FileUploadService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record an uploaded file against a conversation
    pub async fn create(
        &self,
        conversation_id: i32,
        dto: CreateFileUploadDto,
    ) -> Result<FileUploadResponseDto> {
        let upload = sqlx::query_as::<_, FileUpload>(
            r#"
            INSERT INTO file_uploads (conversation_id, filename, file_path, file_size, mime_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, conversation_id, filename, file_path, file_size, mime_type, created_at
            "#,
        )
        .bind(conversation_id)
        .bind(&dto.filename)
        .bind(&dto.file_path)
        .bind(dto.file_size)
        .bind(&dto.mime_type)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "File upload recorded: id={}, conversation_id={}, size={}, mime_type={}",
            upload.id,
            conversation_id,
            upload.file_size,
            upload.mime_type
        );

        Ok(FileUploadResponseDto::from(upload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::{count_rows, seed_conversation};

    fn upload(filename: &str, file_size: i64) -> CreateFileUploadDto {
        CreateFileUploadDto {
            filename: filename.to_string(),
            file_path: format!("/uploads/{}", filename),
            file_size,
            mime_type: "image/png".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_records_metadata(pool: PgPool) {
        let conversation_id = seed_conversation(&pool).await;
        let service = FileUploadService::new(pool);

        let created = service
            .create(conversation_id, upload("diagram.png", 5_000_000_000))
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.conversation_id, conversation_id);
        assert_eq!(created.filename, "diagram.png");
        assert_eq!(created.file_path, "/uploads/diagram.png");
        assert_eq!(created.file_size, 5_000_000_000);
        assert_eq!(created.mime_type, "image/png");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_for_unknown_conversation_is_fk_violation(pool: PgPool) {
        let service = FileUploadService::new(pool);

        let result = service.create(999_999, upload("lost.png", 1)).await;

        assert!(matches!(result, Err(AppError::ForeignKeyViolation(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_uploads_are_removed_with_conversation(pool: PgPool) {
        let conversation_id = seed_conversation(&pool).await;
        let service = FileUploadService::new(pool.clone());
        service
            .create(conversation_id, upload("a.png", 10))
            .await
            .unwrap();
        service
            .create(conversation_id, upload("b.png", 20))
            .await
            .unwrap();
        assert_eq!(count_rows(&pool, "file_uploads", conversation_id).await, 2);

        sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(conversation_id)
            .execute(&pool)
            .await
            .unwrap();

        assert_eq!(count_rows(&pool, "file_uploads", conversation_id).await, 0);
    }
}
