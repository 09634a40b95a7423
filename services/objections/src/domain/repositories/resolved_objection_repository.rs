//! 归档仓储接口

use async_trait::async_trait;
use civix_common::UserId;
use civix_errors::AppResult;

use crate::domain::entities::{ResolvedObjection, ResolvedObjectionView};

#[async_trait]
pub trait ResolvedObjectionRepository: Send + Sync {
    /// 插入归档快照
    async fn insert_snapshot(&self, snapshot: &ResolvedObjection) -> AppResult<()>;

    /// 全部归档行（含提交人显示名），按解决时间倒序
    async fn list_all(&self) -> AppResult<Vec<ResolvedObjectionView>>;

    /// 指定用户的归档行，按解决时间倒序
    async fn list_by_owner(&self, owner: &UserId) -> AppResult<Vec<ResolvedObjectionView>>;
}
