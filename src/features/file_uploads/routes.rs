use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::file_uploads::{handlers, services::FileUploadService};

/// Create routes for the file uploads feature
pub fn routes(service: Arc<FileUploadService>) -> Router {
    Router::new()
        .route(
            "/api/conversations/{id}/file-uploads",
            post(handlers::create_file_upload),
        )
        .with_state(service)
}
