//! 标记待确认命令

use civix_cqrs_core::Command;

use crate::domain::services::Identity;

/// 标记待确认命令（authority 发起）
#[derive(Debug, Clone)]
pub struct MarkPendingApprovalCommand {
    pub objection_id: i64,
    pub identity: Identity,
}

impl Command for MarkPendingApprovalCommand {
    type Result = ();
}
