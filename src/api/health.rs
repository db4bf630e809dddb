use axum::response::Json;

use crate::types::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
