//! Civix Objection Portal Service Library
//!
//! 分层架构：
//! - `domain`: 领域层（实体、值对象、仓储接口、访问策略、状态机）
//! - `application`: 应用层（命令、查询、处理器、DTO）
//! - `infrastructure`: 基础设施层（PostgreSQL 持久化）
//! - `api`: 接口层（HTTP/JSON）

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
