//! 查询定义

pub mod objection_queries;

pub use objection_queries::*;
