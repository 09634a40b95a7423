//! 健康检查路由

use axum::{Json, Router, extract::State, routing::get};
use civix_telemetry::HealthStatus;

use crate::infrastructure::persistence::connection;

use super::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let mut status = HealthStatus::new();

    let db = connection::check_connection(&state.pool).await;
    status.add_check("database", db.is_ok(), db.err().map(|e| e.to_string()));

    Json(status)
}
