pub mod conversations;
pub mod file_uploads;
pub mod health;
pub mod messages;
pub mod participants;

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

use conversations::ConversationService;
use file_uploads::FileUploadService;
use messages::MessageService;
use participants::ParticipantService;

/// All API routes, each feature with its own service over the shared pool
pub fn api_routes(pool: PgPool) -> Router {
    Router::new()
        .merge(conversations::routes::routes(Arc::new(
            ConversationService::new(pool.clone()),
        )))
        .merge(messages::routes::routes(Arc::new(MessageService::new(
            pool.clone(),
        ))))
        .merge(participants::routes::routes(Arc::new(
            ParticipantService::new(pool.clone()),
        )))
        .merge(file_uploads::routes::routes(Arc::new(
            FileUploadService::new(pool),
        )))
        .merge(health::routes())
}
