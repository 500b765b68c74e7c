use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::conversations::{handlers, services::ConversationService};

/// Create routes for the conversations feature
pub fn routes(service: Arc<ConversationService>) -> Router {
    Router::new()
        .route(
            "/api/conversations",
            get(handlers::list_conversations).post(handlers::create_conversation),
        )
        .route(
            "/api/conversations/{id}",
            get(handlers::get_conversation)
                .put(handlers::update_conversation)
                .delete(handlers::delete_conversation),
        )
        .with_state(service)
}
