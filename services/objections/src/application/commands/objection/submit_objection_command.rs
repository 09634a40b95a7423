//! 提交异议命令

use civix_common::UserId;
use civix_cqrs_core::Command;

/// 提交异议命令
#[derive(Debug, Clone)]
pub struct SubmitObjectionCommand {
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub objection_type: String,
    /// 已认证时为提交人，legacy 匿名提交为 None
    pub submitter: Option<UserId>,
}

impl Command for SubmitObjectionCommand {
    type Result = SubmitObjectionResult;
}

/// 提交结果
#[derive(Debug, Clone)]
pub struct SubmitObjectionResult {
    pub id: i64,
}
