use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::file_uploads::dtos::{CreateFileUploadDto, FileUploadResponseDto};
use crate::features::file_uploads::services::FileUploadService;
use crate::shared::types::ApiResponse;

/// Record file-upload metadata for a conversation
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/file-uploads",
    params(
        ("id" = i32, Path, description = "Conversation ID")
    ),
    request_body = CreateFileUploadDto,
    responses(
        (status = 201, description = "File upload recorded", body = ApiResponse<FileUploadResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Conversation does not exist")
    ),
    tag = "file-uploads"
)]
pub async fn create_file_upload(
    State(service): State<Arc<FileUploadService>>,
    AppPath(conversation_id): AppPath<i32>,
    AppJson(dto): AppJson<CreateFileUploadDto>,
) -> Result<(StatusCode, Json<ApiResponse<FileUploadResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let upload = service.create(conversation_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(upload), None, None)),
    ))
}

#[cfg(test)]
mod tests {
    use crate::features::file_uploads::routes;
    use crate::features::file_uploads::services::FileUploadService;
    use crate::shared::test_helpers::{lazy_pool, seed_conversation, test_server};
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use sqlx::PgPool;
    use std::sync::Arc;

    fn server(pool: PgPool) -> axum_test::TestServer {
        test_server(routes::routes(Arc::new(FileUploadService::new(pool))))
    }

    #[tokio::test]
    async fn test_rejects_missing_mime_type() {
        let server = server(lazy_pool());

        let response = server
            .post("/api/conversations/1/file-uploads")
            .json(&json!({ "filename": "a.txt", "file_path": "/tmp/a.txt", "file_size": 5 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_free_form_values_pass_validation() {
        let server = server(lazy_pool());

        // Unreachable store: anything but a 400 means validation let it through
        let response = server
            .post("/api/conversations/1/file-uploads")
            .json(&json!({
                "filename": "",
                "file_path": "",
                "file_size": -5,
                "mime_type": "pdf"
            }))
            .await;

        assert_ne!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_file_upload(pool: PgPool) {
        let conversation_id = seed_conversation(&pool).await;
        let server = server(pool);

        let response = server
            .post(&format!("/api/conversations/{}/file-uploads", conversation_id))
            .json(&json!({
                "filename": "notes.md",
                "file_path": "/uploads/notes.md",
                "file_size": 512,
                "mime_type": "text/markdown"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["conversation_id"], conversation_id);
        assert_eq!(body["data"]["file_size"], 512);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_unusual_metadata_is_stored_verbatim(pool: PgPool) {
        let conversation_id = seed_conversation(&pool).await;
        let server = server(pool);

        let response = server
            .post(&format!("/api/conversations/{}/file-uploads", conversation_id))
            .json(&json!({
                "filename": "",
                "file_path": "",
                "file_size": -1,
                "mime_type": "pdf"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["file_size"], -1);
        assert_eq!(body["data"]["mime_type"], "pdf");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_unknown_conversation_is_409(pool: PgPool) {
        let server = server(pool);

        server
            .post("/api/conversations/424242/file-uploads")
            .json(&json!({
                "filename": "x.bin",
                "file_path": "/uploads/x.bin",
                "file_size": 1,
                "mime_type": "application/octet-stream"
            }))
            .await
            .assert_status(StatusCode::CONFLICT);
    }
}
