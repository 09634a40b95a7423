//! 标记待确认处理器

use std::sync::Arc;

use async_trait::async_trait;
use civix_common::ObjectionId;
use civix_cqrs_core::CommandHandler;
use civix_errors::{AppError, AppResult};

use crate::application::commands::objection::MarkPendingApprovalCommand;
use crate::domain::entities::ObjectionStatus;
use crate::domain::repositories::ObjectionRepository;
use crate::domain::services::AccessPolicy;

pub struct MarkPendingApprovalHandler {
    objection_repository: Arc<dyn ObjectionRepository>,
}

impl MarkPendingApprovalHandler {
    pub fn new(objection_repository: Arc<dyn ObjectionRepository>) -> Self {
        Self {
            objection_repository,
        }
    }
}

#[async_trait]
impl CommandHandler<MarkPendingApprovalCommand> for MarkPendingApprovalHandler {
    async fn handle(&self, command: MarkPendingApprovalCommand) -> AppResult<()> {
        AccessPolicy::ensure_authority(&command.identity)?;

        let id = ObjectionId::from_i64(command.objection_id);
        let mut objection = self
            .objection_repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Objection not found"))?;

        // 实体校验状态前置条件
        objection.mark_pending_approval()?;

        // 条件写：并发触发时只有一个成功
        let updated = self
            .objection_repository
            .update_status(
                &id,
                &ObjectionStatus::Pending,
                &ObjectionStatus::PendingApproval,
            )
            .await?;
        if !updated {
            return Err(AppError::conflict("Objection is no longer pending"));
        }

        tracing::info!(objection_id = %id, "Objection marked for approval");

        Ok(())
    }
}
