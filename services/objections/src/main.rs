//! Civix Objection Portal Service

use std::net::SocketAddr;

use civix_auth_core::TokenService;
use civix_config::AppConfig;
use civix_telemetry::init_tracing;
use secrecy::ExposeSecret;
use tracing::info;

use objection_service::api::http::{AppState, app_router};
use objection_service::infrastructure::persistence::connection;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    init_tracing(&config.telemetry.log_level);

    info!("Starting objection service");

    // 连接数据库
    let pool = connection::create_pool(
        config.database.url.expose_secret(),
        config.database.max_connections,
    )
    .await?;

    // 应用迁移
    sqlx::migrate!("./migrations").run(&pool).await?;

    // 构建状态与路由
    let token_service = TokenService::new(
        config.jwt.secret.expose_secret(),
        config.jwt.expires_in as i64,
    );
    let state = AppState::new(pool, token_service);
    let app = app_router(state);

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
