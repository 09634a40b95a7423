//! 注册命令

use civix_cqrs_core::Command;

/// 注册命令
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    /// 未指定时默认为 user
    pub role: Option<String>,
}

impl Command for SignupCommand {
    type Result = SignupResult;
}

/// 注册结果
#[derive(Debug, Clone)]
pub struct SignupResult {
    pub user_id: String,
}
