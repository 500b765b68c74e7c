use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::messages::{handlers, services::MessageService};

/// Create routes for the messages feature. Messages are append-only, so there
/// is no update or delete route.
pub fn routes(service: Arc<MessageService>) -> Router {
    Router::new()
        .route(
            "/api/conversations/{id}/messages",
            get(handlers::list_messages).post(handlers::create_message),
        )
        .with_state(service)
}
