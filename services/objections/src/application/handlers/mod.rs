//! 命令/查询处理器

pub mod auth;
pub mod objection;

pub use auth::*;
pub use objection::*;
