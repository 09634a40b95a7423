//! 注册处理器

use std::sync::Arc;

use async_trait::async_trait;
use civix_cqrs_core::CommandHandler;
use civix_errors::{AppError, AppResult};

use crate::application::commands::auth::{SignupCommand, SignupResult};
use crate::domain::entities::{Role, User};
use crate::domain::repositories::UserRepository;
use crate::domain::services::PasswordService;
use crate::domain::value_objects::Email;

pub struct SignupHandler {
    user_repository: Arc<dyn UserRepository>,
}

impl SignupHandler {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl CommandHandler<SignupCommand> for SignupHandler {
    async fn handle(&self, command: SignupCommand) -> AppResult<SignupResult> {
        let email = Email::new(&command.email)?;

        let role = match command.role.as_deref() {
            None => Role::default(),
            Some(raw) => Role::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Unknown role: {}", raw)))?,
        };

        // 邮箱唯一性检查
        if self.user_repository.exists_by_email(&email).await? {
            return Err(AppError::conflict("Email is already registered"));
        }

        let password_hash = PasswordService::hash_password(&command.password)?;
        let name = command.name.filter(|n| !n.trim().is_empty());
        let user = User::new(name, email, password_hash, role);

        self.user_repository.save(&user).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(SignupResult {
            user_id: user.id.0.to_string(),
        })
    }
}
