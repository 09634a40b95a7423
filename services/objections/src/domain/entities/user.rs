//! 用户实体

use chrono::{DateTime, Utc};
use civix_common::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Email, HashedPassword};

/// 用户角色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Authority,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Authority => "authority",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "authority" => Some(Self::Authority),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

/// 用户实体
///
/// 注册后不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: Option<String>,
        email: Email,
        password_hash: HashedPassword,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn is_authority(&self) -> bool {
        self.role == Role::Authority
    }
}
