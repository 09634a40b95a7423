//! PostgreSQL 连接管理

use std::time::Duration;

use civix_errors::{AppError, AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// 创建 PostgreSQL 连接池
///
/// 连接池在进程启动时创建一次，显式注入各 Repository。
pub async fn create_pool(url: &str, max_connections: u32) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .connect(url)
        .await
        .map_err(|e| AppError::database(format!("Failed to create pool: {}", e)))
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;
    Ok(())
}
