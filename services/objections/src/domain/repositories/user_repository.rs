//! 用户仓储接口

use async_trait::async_trait;
use civix_common::UserId;
use civix_errors::AppResult;

use crate::domain::entities::User;
use crate::domain::value_objects::Email;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 按 ID 查找用户
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// 按邮箱查找用户（精确匹配，大小写敏感）
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    /// 邮箱是否已注册
    async fn exists_by_email(&self, email: &Email) -> AppResult<bool>;

    /// 保存用户
    async fn save(&self, user: &User) -> AppResult<()>;
}
