//! PostgreSQL 归档 Repository 实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use civix_common::{ObjectionId, UserId};
use civix_errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{ResolvedObjection, ResolvedObjectionView};
use crate::domain::repositories::ResolvedObjectionRepository;

pub struct PostgresResolvedObjectionRepository {
    pool: PgPool,
}

impl PostgresResolvedObjectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) const INSERT_RESOLVED: &str = r#"
    INSERT INTO resolved_objections
        (objection_id, user_id, description, latitude, longitude, image_url, objection_type, resolved_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
"#;

pub(crate) const LIST_RESOLVED: &str = r#"
    SELECT r.objection_id, r.user_id, r.description, r.latitude, r.longitude,
           r.image_url, r.objection_type, r.resolved_at, u.name AS owner_name
    FROM resolved_objections r
    LEFT JOIN users u ON u.id = r.user_id
    ORDER BY r.resolved_at DESC
"#;

pub(crate) const LIST_RESOLVED_BY_OWNER: &str = r#"
    SELECT r.objection_id, r.user_id, r.description, r.latitude, r.longitude,
           r.image_url, r.objection_type, r.resolved_at, u.name AS owner_name
    FROM resolved_objections r
    LEFT JOIN users u ON u.id = r.user_id
    WHERE r.user_id = $1
    ORDER BY r.resolved_at DESC
"#;

#[async_trait]
impl ResolvedObjectionRepository for PostgresResolvedObjectionRepository {
    async fn insert_snapshot(&self, snapshot: &ResolvedObjection) -> AppResult<()> {
        sqlx::query(INSERT_RESOLVED)
            .bind(snapshot.objection_id.0)
            .bind(snapshot.user_id.0)
            .bind(&snapshot.description)
            .bind(snapshot.latitude)
            .bind(snapshot.longitude)
            .bind(&snapshot.image_url)
            .bind(&snapshot.objection_type)
            .bind(snapshot.resolved_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert resolved snapshot: {}", e)))?;

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<ResolvedObjectionView>> {
        let rows = sqlx::query_as::<_, ResolvedObjectionRow>(LIST_RESOLVED)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list resolved objections: {}", e)))?;

        Ok(rows.into_iter().map(ResolvedObjectionRow::into_view).collect())
    }

    async fn list_by_owner(&self, owner: &UserId) -> AppResult<Vec<ResolvedObjectionView>> {
        let rows = sqlx::query_as::<_, ResolvedObjectionRow>(LIST_RESOLVED_BY_OWNER)
            .bind(owner.0)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list resolved objections: {}", e)))?;

        Ok(rows.into_iter().map(ResolvedObjectionRow::into_view).collect())
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ResolvedObjectionRow {
    objection_id: i64,
    user_id: Uuid,
    description: String,
    latitude: f64,
    longitude: f64,
    image_url: String,
    objection_type: String,
    resolved_at: DateTime<Utc>,
    owner_name: Option<String>,
}

impl ResolvedObjectionRow {
    pub(crate) fn into_view(self) -> ResolvedObjectionView {
        ResolvedObjectionView {
            resolved: ResolvedObjection {
                objection_id: ObjectionId::from_i64(self.objection_id),
                user_id: UserId::from_uuid(self.user_id),
                description: self.description,
                latitude: self.latitude,
                longitude: self.longitude,
                image_url: self.image_url,
                objection_type: self.objection_type,
                resolved_at: self.resolved_at,
            },
            owner_name: self.owner_name,
        }
    }
}
