use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::file_uploads::models::FileUpload;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFileUploadDto {
    pub filename: String,

    pub file_path: String,

    /// Size in bytes, stored as given
    pub file_size: i64,

    /// Stored verbatim; not checked against any MIME grammar
    #[schema(example = "application/pdf")]
    pub mime_type: String,
}

// Response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileUploadResponseDto {
    pub id: i32,
    pub conversation_id: i32,
    pub filename: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<FileUpload> for FileUploadResponseDto {
    fn from(f: FileUpload) -> Self {
        Self {
            id: f.id,
            conversation_id: f.conversation_id,
            filename: f.filename,
            file_path: f.file_path,
            file_size: f.file_size,
            mime_type: f.mime_type,
            created_at: f.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_requires_every_field() {
        for missing in ["filename", "file_path", "file_size", "mime_type"] {
            let mut body = json!({
                "filename": "report.pdf",
                "file_path": "/uploads/2025/report.pdf",
                "file_size": 2048,
                "mime_type": "application/pdf"
            });
            body.as_object_mut().unwrap().remove(missing);

            let result: Result<CreateFileUploadDto, _> = serde_json::from_value(body);
            assert!(result.is_err(), "expected missing {} to be rejected", missing);
        }
    }

    #[test]
    fn test_create_accepts_unchecked_values() {
        let dto: CreateFileUploadDto = serde_json::from_value(json!({
            "filename": "",
            "file_path": "",
            "file_size": -1,
            "mime_type": "pdf"
        }))
        .unwrap();

        assert_eq!(dto.file_size, -1);
        assert_eq!(dto.mime_type, "pdf");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_fractional_size() {
        let result: Result<CreateFileUploadDto, _> = serde_json::from_value(json!({
            "filename": "a",
            "file_path": "/a",
            "file_size": 1.5,
            "mime_type": "text/plain"
        }));
        assert!(result.is_err());
    }
}
