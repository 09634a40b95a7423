//! 确认解决命令

use civix_cqrs_core::Command;

use crate::domain::services::Identity;

/// 确认解决命令（提交人发起）
#[derive(Debug, Clone)]
pub struct ApproveObjectionCommand {
    pub objection_id: i64,
    pub identity: Identity,
}

impl Command for ApproveObjectionCommand {
    type Result = ();
}
