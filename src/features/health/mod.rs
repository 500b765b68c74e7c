use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::types::ApiResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Liveness check. Does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse<HealthResponseDto>)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<ApiResponse<HealthResponseDto>> {
    Json(ApiResponse::success(
        Some(HealthResponseDto {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }),
        None,
        None,
    ))
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_server;
    use serde_json::Value;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let before = Utc::now();
        let server = test_server(routes());

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");

        let timestamp: DateTime<Utc> =
            serde_json::from_value(body["data"]["timestamp"].clone()).unwrap();
        assert!(timestamp >= before);
    }
}
