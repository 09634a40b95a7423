//! 值对象

mod email;
mod password;

pub use email::*;
pub use password::*;
