//! 确认解决处理器
//!
//! 归档插入与状态更新在同一事务中提交，部分失败时整体回滚。

use std::sync::Arc;

use async_trait::async_trait;
use civix_common::ObjectionId;
use civix_cqrs_core::CommandHandler;
use civix_errors::{AppError, AppResult};

use crate::application::commands::objection::ApproveObjectionCommand;
use crate::domain::entities::{ObjectionStatus, ResolvedObjection};
use crate::domain::services::AccessPolicy;
use crate::domain::unit_of_work::UnitOfWorkFactory;

pub struct ApproveObjectionHandler {
    uow_factory: Arc<dyn UnitOfWorkFactory>,
}

impl ApproveObjectionHandler {
    pub fn new(uow_factory: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow_factory }
    }
}

#[async_trait]
impl CommandHandler<ApproveObjectionCommand> for ApproveObjectionHandler {
    async fn handle(&self, command: ApproveObjectionCommand) -> AppResult<()> {
        let id = ObjectionId::from_i64(command.objection_id);

        // 开始事务；提前返回时未提交的事务自动回滚
        let uow = self.uow_factory.begin().await?;

        let mut objection = uow
            .objections()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Objection not found"))?;

        AccessPolicy::ensure_owner(&command.identity, &objection)?;

        // 实体校验状态前置条件
        objection.approve()?;

        // 条件写：并发确认时至多一个提交成功，防止重复归档
        let updated = uow
            .objections()
            .update_status(
                &id,
                &ObjectionStatus::PendingApproval,
                &ObjectionStatus::Resolved,
            )
            .await?;
        if !updated {
            return Err(AppError::conflict("Objection is not awaiting approval"));
        }

        let snapshot = ResolvedObjection::snapshot_of(&objection, command.identity.user_id.clone());
        uow.resolved_objections().insert_snapshot(&snapshot).await?;

        uow.commit().await?;

        tracing::info!(objection_id = %id, "Objection resolved");

        Ok(())
    }
}
