//! HTTP/JSON API

mod auth_routes;
mod error;
mod extractors;
mod health;
mod objection_routes;
mod state;

pub use error::{ApiError, ApiResult};
pub use extractors::{AuthIdentity, OptionalIdentity, auth_middleware};
pub use state::AppState;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 组装完整路由
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes::auth_routes())
        .merge(objection_routes::objection_routes(state.clone()))
        .merge(health::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
