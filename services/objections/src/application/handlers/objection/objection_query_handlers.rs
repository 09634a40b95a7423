//! 异议查询处理器

use std::sync::Arc;

use async_trait::async_trait;
use civix_common::ObjectionId;
use civix_cqrs_core::QueryHandler;
use civix_errors::{AppError, AppResult};

use crate::application::dto::{ObjectionDto, ResolvedObjectionDto};
use crate::application::queries::{GetObjectionQuery, ListObjectionsQuery, ListResolvedQuery};
use crate::domain::repositories::{ObjectionRepository, ResolvedObjectionRepository};
use crate::domain::services::AccessPolicy;

/// 异议列表查询处理器
pub struct ListObjectionsQueryHandler {
    objection_repository: Arc<dyn ObjectionRepository>,
}

impl ListObjectionsQueryHandler {
    pub fn new(objection_repository: Arc<dyn ObjectionRepository>) -> Self {
        Self {
            objection_repository,
        }
    }
}

#[async_trait]
impl QueryHandler<ListObjectionsQuery> for ListObjectionsQueryHandler {
    async fn handle(&self, query: ListObjectionsQuery) -> AppResult<Vec<ObjectionDto>> {
        let filter = AccessPolicy::list_scope(&query.identity, query.status);
        let objections = self.objection_repository.list(&filter).await?;

        Ok(objections.iter().map(ObjectionDto::from_entity).collect())
    }
}

/// 单条异议查询处理器
pub struct GetObjectionQueryHandler {
    objection_repository: Arc<dyn ObjectionRepository>,
}

impl GetObjectionQueryHandler {
    pub fn new(objection_repository: Arc<dyn ObjectionRepository>) -> Self {
        Self {
            objection_repository,
        }
    }
}

#[async_trait]
impl QueryHandler<GetObjectionQuery> for GetObjectionQueryHandler {
    async fn handle(&self, query: GetObjectionQuery) -> AppResult<ObjectionDto> {
        let id = ObjectionId::from_i64(query.objection_id);
        let objection = self
            .objection_repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Objection not found"))?;

        AccessPolicy::ensure_can_view(&query.identity, &objection)?;

        Ok(ObjectionDto::from_entity(&objection))
    }
}

/// 归档列表查询处理器
pub struct ListResolvedQueryHandler {
    resolved_objection_repository: Arc<dyn ResolvedObjectionRepository>,
}

impl ListResolvedQueryHandler {
    pub fn new(resolved_objection_repository: Arc<dyn ResolvedObjectionRepository>) -> Self {
        Self {
            resolved_objection_repository,
        }
    }
}

#[async_trait]
impl QueryHandler<ListResolvedQuery> for ListResolvedQueryHandler {
    async fn handle(&self, query: ListResolvedQuery) -> AppResult<Vec<ResolvedObjectionDto>> {
        let views = match AccessPolicy::resolved_scope(&query.identity) {
            None => self.resolved_objection_repository.list_all().await?,
            Some(owner) => {
                self.resolved_objection_repository
                    .list_by_owner(&owner)
                    .await?
            }
        };

        Ok(views.iter().map(ResolvedObjectionDto::from_view).collect())
    }
}
