//! 提交异议处理器

use std::sync::Arc;

use async_trait::async_trait;
use civix_cqrs_core::CommandHandler;
use civix_errors::AppResult;

use crate::application::commands::objection::{SubmitObjectionCommand, SubmitObjectionResult};
use crate::domain::entities::NewObjection;
use crate::domain::repositories::ObjectionRepository;

pub struct SubmitObjectionHandler {
    objection_repository: Arc<dyn ObjectionRepository>,
}

impl SubmitObjectionHandler {
    pub fn new(objection_repository: Arc<dyn ObjectionRepository>) -> Self {
        Self {
            objection_repository,
        }
    }
}

#[async_trait]
impl CommandHandler<SubmitObjectionCommand> for SubmitObjectionHandler {
    async fn handle(&self, command: SubmitObjectionCommand) -> AppResult<SubmitObjectionResult> {
        let new_objection = NewObjection::new(
            command.description,
            command.latitude,
            command.longitude,
            command.image_url,
            command.objection_type,
            command.submitter,
        )?;

        let objection = self.objection_repository.insert(&new_objection).await?;

        tracing::info!(
            objection_id = %objection.id,
            objection_type = %objection.objection_type,
            "Objection submitted"
        );

        Ok(SubmitObjectionResult {
            id: objection.id.as_i64(),
        })
    }
}
