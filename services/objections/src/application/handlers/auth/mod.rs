//! 认证处理器

pub mod signin_handler;
pub mod signup_handler;

pub use signin_handler::*;
pub use signup_handler::*;
