//! 异议处理器

pub mod approve_objection_handler;
pub mod mark_pending_approval_handler;
pub mod objection_query_handlers;
pub mod submit_objection_handler;

pub use approve_objection_handler::*;
pub use mark_pending_approval_handler::*;
pub use objection_query_handlers::*;
pub use submit_objection_handler::*;
