//! 异议仓储接口

use async_trait::async_trait;
use civix_common::{ObjectionId, UserId};
use civix_errors::AppResult;

use crate::domain::entities::{NewObjection, Objection, ObjectionStatus};

/// 列表过滤条件
///
/// 由访问策略计算，仓储不做业务判断。
#[derive(Debug, Clone, Default)]
pub struct ObjectionFilter {
    /// 只看指定用户的异议
    pub owner: Option<UserId>,
    /// 精确状态过滤
    pub status: Option<ObjectionStatus>,
    /// 未指定状态时是否排除已解决
    pub exclude_resolved: bool,
}

#[async_trait]
pub trait ObjectionRepository: Send + Sync {
    /// 插入新异议，id 与创建时间由数据库生成
    async fn insert(&self, objection: &NewObjection) -> AppResult<Objection>;

    /// 按 ID 查找
    async fn find_by_id(&self, id: &ObjectionId) -> AppResult<Option<Objection>>;

    /// 按过滤条件查询，按创建时间倒序
    async fn list(&self, filter: &ObjectionFilter) -> AppResult<Vec<Objection>>;

    /// 条件状态更新
    ///
    /// 只有当前状态等于 from 时才更新，返回是否有行被更新。
    /// 并发转移由该条件写保证至多一个成功。
    async fn update_status(
        &self,
        id: &ObjectionId,
        from: &ObjectionStatus,
        to: &ObjectionStatus,
    ) -> AppResult<bool>;
}
