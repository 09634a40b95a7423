//! 登录命令

use civix_cqrs_core::Command;

use crate::application::dto::UserDto;

/// 登录命令
#[derive(Debug, Clone)]
pub struct SigninCommand {
    pub email: String,
    pub password: String,
}

impl Command for SigninCommand {
    type Result = SigninResult;
}

/// 登录结果
#[derive(Debug, Clone)]
pub struct SigninResult {
    pub token: String,
    pub user: UserDto,
}
