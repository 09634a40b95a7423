//! 应用状态

use std::sync::Arc;

use axum::extract::FromRef;
use civix_auth_core::TokenService;
use sqlx::PgPool;

use crate::application::handlers::{
    ApproveObjectionHandler, GetObjectionQueryHandler, ListObjectionsQueryHandler,
    ListResolvedQueryHandler, MarkPendingApprovalHandler, SigninHandler, SignupHandler,
    SubmitObjectionHandler,
};
use crate::domain::repositories::{
    ObjectionRepository, ResolvedObjectionRepository, UserRepository,
};
use crate::domain::unit_of_work::UnitOfWorkFactory;
use crate::infrastructure::persistence::{
    PostgresObjectionRepository, PostgresResolvedObjectionRepository, PostgresUnitOfWorkFactory,
    PostgresUserRepository,
};

/// 各路由共享的应用状态
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub token_service: Arc<TokenService>,
    pub signup_handler: Arc<SignupHandler>,
    pub signin_handler: Arc<SigninHandler>,
    pub submit_handler: Arc<SubmitObjectionHandler>,
    pub mark_pending_approval_handler: Arc<MarkPendingApprovalHandler>,
    pub approve_handler: Arc<ApproveObjectionHandler>,
    pub list_objections_handler: Arc<ListObjectionsQueryHandler>,
    pub get_objection_handler: Arc<GetObjectionQueryHandler>,
    pub list_resolved_handler: Arc<ListResolvedQueryHandler>,
}

impl AppState {
    /// 连接池在启动时注入，各 Repository 显式构造
    pub fn new(pool: PgPool, token_service: TokenService) -> Self {
        let token_service = Arc::new(token_service);

        let user_repository: Arc<dyn UserRepository> =
            Arc::new(PostgresUserRepository::new(pool.clone()));
        let objection_repository: Arc<dyn ObjectionRepository> =
            Arc::new(PostgresObjectionRepository::new(pool.clone()));
        let resolved_repository: Arc<dyn ResolvedObjectionRepository> =
            Arc::new(PostgresResolvedObjectionRepository::new(pool.clone()));
        let uow_factory: Arc<dyn UnitOfWorkFactory> =
            Arc::new(PostgresUnitOfWorkFactory::new(pool.clone()));

        Self {
            pool,
            token_service: token_service.clone(),
            signup_handler: Arc::new(SignupHandler::new(user_repository.clone())),
            signin_handler: Arc::new(SigninHandler::new(user_repository, token_service)),
            submit_handler: Arc::new(SubmitObjectionHandler::new(objection_repository.clone())),
            mark_pending_approval_handler: Arc::new(MarkPendingApprovalHandler::new(
                objection_repository.clone(),
            )),
            approve_handler: Arc::new(ApproveObjectionHandler::new(uow_factory)),
            list_objections_handler: Arc::new(ListObjectionsQueryHandler::new(
                objection_repository.clone(),
            )),
            get_objection_handler: Arc::new(GetObjectionQueryHandler::new(objection_repository)),
            list_resolved_handler: Arc::new(ListResolvedQueryHandler::new(resolved_repository)),
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.token_service.clone()
    }
}
