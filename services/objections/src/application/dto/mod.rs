//! 数据传输对象

mod objection_dto;
mod user_dto;

pub use objection_dto::*;
pub use user_dto::*;
