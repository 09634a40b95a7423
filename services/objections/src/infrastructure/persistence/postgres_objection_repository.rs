//! PostgreSQL 异议 Repository 实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use civix_common::{ObjectionId, UserId};
use civix_errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{NewObjection, Objection, ObjectionStatus};
use crate::domain::repositories::{ObjectionFilter, ObjectionRepository};

pub struct PostgresObjectionRepository {
    pool: PgPool,
}

impl PostgresObjectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) const INSERT_OBJECTION: &str = r#"
    INSERT INTO objections (description, latitude, longitude, image_url, objection_type, status, user_id)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    RETURNING id, description, latitude, longitude, image_url, objection_type, status, user_id, created_at
"#;

pub(crate) const SELECT_OBJECTION_BY_ID: &str = r#"
    SELECT id, description, latitude, longitude, image_url, objection_type, status, user_id, created_at
    FROM objections
    WHERE id = $1
"#;

/// 过滤参数允许为 NULL，在 SQL 侧短路；排序是对外契约的一部分
pub(crate) const LIST_OBJECTIONS: &str = r#"
    SELECT id, description, latitude, longitude, image_url, objection_type, status, user_id, created_at
    FROM objections
    WHERE ($1::uuid IS NULL OR user_id = $1)
      AND ($2::text IS NULL OR status = $2)
      AND (NOT $3 OR status <> 'resolved')
    ORDER BY created_at DESC
"#;

pub(crate) const UPDATE_OBJECTION_STATUS: &str = r#"
    UPDATE objections SET status = $3 WHERE id = $1 AND status = $2
"#;

#[async_trait]
impl ObjectionRepository for PostgresObjectionRepository {
    async fn insert(&self, objection: &NewObjection) -> AppResult<Objection> {
        let row = sqlx::query_as::<_, ObjectionRow>(INSERT_OBJECTION)
            .bind(&objection.description)
            .bind(objection.latitude)
            .bind(objection.longitude)
            .bind(&objection.image_url)
            .bind(&objection.objection_type)
            .bind(ObjectionStatus::Pending.as_str())
            .bind(objection.user_id.as_ref().map(|id| id.0))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert objection: {}", e)))?;

        row.into_objection()
    }

    async fn find_by_id(&self, id: &ObjectionId) -> AppResult<Option<Objection>> {
        let row = sqlx::query_as::<_, ObjectionRow>(SELECT_OBJECTION_BY_ID)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to find objection: {}", e)))?;

        match row {
            Some(r) => Ok(Some(r.into_objection()?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ObjectionFilter) -> AppResult<Vec<Objection>> {
        let rows = sqlx::query_as::<_, ObjectionRow>(LIST_OBJECTIONS)
            .bind(filter.owner.as_ref().map(|id| id.0))
            .bind(filter.status.as_ref().map(|s| s.as_str()))
            .bind(filter.exclude_resolved)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list objections: {}", e)))?;

        rows.into_iter().map(|r| r.into_objection()).collect()
    }

    async fn update_status(
        &self,
        id: &ObjectionId,
        from: &ObjectionStatus,
        to: &ObjectionStatus,
    ) -> AppResult<bool> {
        let result = sqlx::query(UPDATE_OBJECTION_STATUS)
            .bind(id.0)
            .bind(from.as_str())
            .bind(to.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update objection status: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ObjectionRow {
    id: i64,
    description: String,
    latitude: f64,
    longitude: f64,
    image_url: String,
    objection_type: String,
    status: String,
    user_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl ObjectionRow {
    pub(crate) fn into_objection(self) -> AppResult<Objection> {
        // 非法状态不做静默纠正，按数据损坏处理
        let status = ObjectionStatus::parse(&self.status).ok_or_else(|| {
            AppError::database(format!(
                "Invalid status in database for objection {}: {}",
                self.id, self.status
            ))
        })?;

        Ok(Objection {
            id: ObjectionId::from_i64(self.id),
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            image_url: self.image_url,
            objection_type: self.objection_type,
            status,
            user_id: self.user_id.map(UserId::from_uuid),
            created_at: self.created_at,
        })
    }
}
