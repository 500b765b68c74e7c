use axum::{routing::get, routing::put, Router};
use std::sync::Arc;

use crate::features::participants::{handlers, services::ParticipantService};

/// Create routes for the participants feature
pub fn routes(service: Arc<ParticipantService>) -> Router {
    Router::new()
        .route(
            "/api/conversations/{id}/participants",
            get(handlers::list_participants).post(handlers::create_participant),
        )
        .route(
            "/api/participants/{id}",
            put(handlers::update_participant).delete(handlers::delete_participant),
        )
        .with_state(service)
}
