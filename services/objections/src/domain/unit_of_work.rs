//! Unit of Work 模式
//!
//! 提供跨多个 Repository 的事务协调能力，确保操作的原子性。

use async_trait::async_trait;
use civix_errors::AppResult;

use crate::domain::repositories::{ObjectionRepository, ResolvedObjectionRepository};

/// Unit of Work trait
///
/// 确认解决时归档插入与状态更新必须在同一事务中提交。
///
/// # 使用示例
///
/// ```ignore
/// let uow = uow_factory.begin().await?;
///
/// uow.objections().update_status(&id, &from, &to).await?;
/// uow.resolved_objections().insert_snapshot(&snapshot).await?;
///
/// uow.commit().await?;
/// ```
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// 获取异议 Repository
    fn objections(&self) -> &dyn ObjectionRepository;

    /// 获取归档 Repository
    fn resolved_objections(&self) -> &dyn ResolvedObjectionRepository;

    /// 提交事务
    ///
    /// 成功时所有更改将持久化，失败时自动回滚。
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// 回滚事务
    ///
    /// 撤销所有未提交的更改；未提交的事务在丢弃时也会回滚。
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// Unit of Work 工厂 trait
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    /// 开始新的事务
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>>;
}
