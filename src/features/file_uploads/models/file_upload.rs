use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Metadata of a file attached to a conversation. The bytes themselves live
/// wherever `file_path` points.
#[derive(Debug, Clone, FromRow)]
pub struct FileUpload {
    pub id: i32,
    pub conversation_id: i32,
    pub filename: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}
