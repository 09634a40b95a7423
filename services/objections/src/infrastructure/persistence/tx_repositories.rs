//! 事务感知的 Repository 实现
//!
//! 这些 Repository 使用共享的 Transaction 而非 PgPool。

use std::sync::Arc;

use async_trait::async_trait;
use civix_common::{ObjectionId, UserId};
use civix_errors::{AppError, AppResult};
use sqlx::{Postgres, Transaction};
use tokio::sync::Mutex;

use crate::domain::entities::{
    NewObjection, Objection, ObjectionStatus, ResolvedObjection, ResolvedObjectionView,
};
use crate::domain::repositories::{
    ObjectionFilter, ObjectionRepository, ResolvedObjectionRepository,
};

use super::postgres_objection_repository::{
    INSERT_OBJECTION, LIST_OBJECTIONS, ObjectionRow, SELECT_OBJECTION_BY_ID,
    UPDATE_OBJECTION_STATUS,
};
use super::postgres_resolved_objection_repository::{
    INSERT_RESOLVED, LIST_RESOLVED, LIST_RESOLVED_BY_OWNER, ResolvedObjectionRow,
};

/// 共享事务类型
pub(crate) type SharedTx = Arc<Mutex<Option<Transaction<'static, Postgres>>>>;

/// 宏：定义一个简单的 TxRepository 结构体
macro_rules! define_tx_repo {
    ($name:ident) => {
        pub struct $name {
            tx: SharedTx,
        }

        impl $name {
            pub(crate) fn new(tx: SharedTx) -> Self {
                Self { tx }
            }
        }
    };
}

define_tx_repo!(TxObjectionRepository);
define_tx_repo!(TxResolvedObjectionRepository);

#[async_trait]
impl ObjectionRepository for TxObjectionRepository {
    async fn insert(&self, objection: &NewObjection) -> AppResult<Objection> {
        let mut guard = self.tx.lock().await;
        let tx = guard
            .as_mut()
            .ok_or_else(|| AppError::internal("Transaction consumed"))?;

        let row = sqlx::query_as::<_, ObjectionRow>(INSERT_OBJECTION)
            .bind(&objection.description)
            .bind(objection.latitude)
            .bind(objection.longitude)
            .bind(&objection.image_url)
            .bind(&objection.objection_type)
            .bind(ObjectionStatus::Pending.as_str())
            .bind(objection.user_id.as_ref().map(|id| id.0))
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert objection: {}", e)))?;

        row.into_objection()
    }

    async fn find_by_id(&self, id: &ObjectionId) -> AppResult<Option<Objection>> {
        let mut guard = self.tx.lock().await;
        let tx = guard
            .as_mut()
            .ok_or_else(|| AppError::internal("Transaction consumed"))?;

        let row = sqlx::query_as::<_, ObjectionRow>(SELECT_OBJECTION_BY_ID)
            .bind(id.0)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to find objection: {}", e)))?;

        match row {
            Some(r) => Ok(Some(r.into_objection()?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ObjectionFilter) -> AppResult<Vec<Objection>> {
        let mut guard = self.tx.lock().await;
        let tx = guard
            .as_mut()
            .ok_or_else(|| AppError::internal("Transaction consumed"))?;

        let rows = sqlx::query_as::<_, ObjectionRow>(LIST_OBJECTIONS)
            .bind(filter.owner.as_ref().map(|id| id.0))
            .bind(filter.status.as_ref().map(|s| s.as_str()))
            .bind(filter.exclude_resolved)
            .fetch_all(&mut **tx)
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
        let mut guard = self.tx.lock().await;
        let tx = guard
            .as_mut()
            .ok_or_else(|| AppError::internal("Transaction consumed"))?;

        let result = sqlx::query(UPDATE_OBJECTION_STATUS)
            .bind(id.0)
            .bind(from.as_str())
            .bind(to.as_str())
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to update objection status: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ResolvedObjectionRepository for TxResolvedObjectionRepository {
    async fn insert_snapshot(&self, snapshot: &ResolvedObjection) -> AppResult<()> {
        let mut guard = self.tx.lock().await;
        let tx = guard
            .as_mut()
            .ok_or_else(|| AppError::internal("Transaction consumed"))?;

        sqlx::query(INSERT_RESOLVED)
            .bind(snapshot.objection_id.0)
            .bind(snapshot.user_id.0)
            .bind(&snapshot.description)
            .bind(snapshot.latitude)
            .bind(snapshot.longitude)
            .bind(&snapshot.image_url)
            .bind(&snapshot.objection_type)
            .bind(snapshot.resolved_at)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert resolved snapshot: {}", e)))?;

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<ResolvedObjectionView>> {
        let mut guard = self.tx.lock().await;
        let tx = guard
            .as_mut()
            .ok_or_else(|| AppError::internal("Transaction consumed"))?;

        let rows = sqlx::query_as::<_, ResolvedObjectionRow>(LIST_RESOLVED)
            .fetch_all(&mut **tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to list resolved objections: {}", e)))?;

        Ok(rows.into_iter().map(ResolvedObjectionRow::into_view).collect())
    }

    async fn list_by_owner(&self, owner: &UserId) -> AppResult<Vec<ResolvedObjectionView>> {
        let mut guard = self.tx.lock().await;
        let tx = guard
            .as_mut()
            .ok_or_else(|| AppError::internal("Transaction consumed"))?;

        let rows = sqlx::query_as::<_, ResolvedObjectionRow>(LIST_RESOLVED_BY_OWNER)
            .bind(owner.0)
            .fetch_all(&mut **tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to list resolved objections: {}", e)))?;

        Ok(rows.into_iter().map(ResolvedObjectionRow::into_view).collect())
    }
}
