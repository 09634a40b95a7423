//! 领域服务

mod access_policy;
mod password_service;

pub use access_policy::*;
pub use password_service::*;
