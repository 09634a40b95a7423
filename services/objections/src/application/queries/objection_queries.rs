//! 异议查询

use civix_cqrs_core::Query;

use crate::application::dto::{ObjectionDto, ResolvedObjectionDto};
use crate::domain::entities::ObjectionStatus;
use crate::domain::services::Identity;

/// 异议列表查询
#[derive(Debug, Clone)]
pub struct ListObjectionsQuery {
    pub identity: Identity,
    pub status: Option<ObjectionStatus>,
}

impl Query for ListObjectionsQuery {
    type Result = Vec<ObjectionDto>;
}

/// 单条异议查询
#[derive(Debug, Clone)]
pub struct GetObjectionQuery {
    pub identity: Identity,
    pub objection_id: i64,
}

impl Query for GetObjectionQuery {
    type Result = ObjectionDto;
}

/// 归档列表查询
#[derive(Debug, Clone)]
pub struct ListResolvedQuery {
    pub identity: Identity,
}

impl Query for ListResolvedQuery {
    type Result = Vec<ResolvedObjectionDto>;
}
