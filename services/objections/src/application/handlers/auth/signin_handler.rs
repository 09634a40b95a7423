//! 登录处理器

use std::sync::Arc;

use async_trait::async_trait;
use civix_auth_core::TokenService;
use civix_cqrs_core::CommandHandler;
use civix_errors::{AppError, AppResult};

use crate::application::commands::auth::{SigninCommand, SigninResult};
use crate::application::dto::UserDto;
use crate::domain::repositories::UserRepository;
use crate::domain::services::PasswordService;
use crate::domain::value_objects::Email;

pub struct SigninHandler {
    user_repository: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
}

impl SigninHandler {
    pub fn new(user_repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }
}

#[async_trait]
impl CommandHandler<SigninCommand> for SigninHandler {
    async fn handle(&self, command: SigninCommand) -> AppResult<SigninResult> {
        // 邮箱未注册、格式非法、密码错误返回同一个错误，不泄露是哪一种
        let email = Email::new(&command.email)
            .map_err(|_| AppError::unauthorized("Invalid credentials"))?;

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => return Err(AppError::unauthorized("Invalid credentials")),
        };

        let valid = PasswordService::verify_password(&command.password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let token =
            self.token_service
                .generate_token(&user.id, user.email.as_str(), user.role.as_str())?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SigninResult {
            token,
            user: UserDto::from_entity(&user),
        })
    }
}
