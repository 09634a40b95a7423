//! 认证命令

pub mod signin_command;
pub mod signup_command;

pub use signin_command::*;
pub use signup_command::*;
