//! 异议命令

pub mod approve_objection_command;
pub mod mark_pending_approval_command;
pub mod submit_objection_command;

pub use approve_objection_command::*;
pub use mark_pending_approval_command::*;
pub use submit_objection_command::*;
