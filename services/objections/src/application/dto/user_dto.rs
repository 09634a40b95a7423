//! 用户 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// 用户信息（对外，不含密码哈希）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub role: String,
}

impl UserDto {
    pub fn from_entity(user: &User) -> Self {
        Self {
            id: user.id.0.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role.as_str().to_string(),
        }
    }
}
