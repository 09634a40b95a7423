//! 认证中间件与提取器

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use civix_auth_core::{Claims, TokenService};
use tracing::{debug, warn};

use crate::domain::entities::Role;
use crate::domain::services::Identity;

/// 已认证身份提取器
///
/// 在 auth_middleware 之后使用；请求扩展中没有身份时拒绝为 401。
pub struct AuthIdentity(pub Identity);

impl<S> FromRequestParts<S> for AuthIdentity
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthIdentity)
            .ok_or((StatusCode::UNAUTHORIZED, "Authentication required"))
    }
}

/// 可选身份提取器（legacy 匿名提交路径）
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Identity>().cloned()))
    }
}

/// 将 Claims 转换为领域身份
fn identity_from_claims(claims: &Claims) -> Option<Identity> {
    let user_id = claims.user_id().ok()?;
    let role = Role::parse(&claims.role)?;
    Some(Identity::new(user_id, role))
}

/// JWT 认证中间件
///
/// 验证 Bearer token 并将身份注入请求扩展。
/// 没有 Authorization 头时放行，由 AuthIdentity 提取器决定是否要求认证；
/// 有头但无效时直接返回 401。
pub async fn auth_middleware(
    State(token_service): State<Arc<TokenService>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    match auth_header {
        None => Ok(next.run(request).await),
        Some(header) if header.starts_with("Bearer ") => {
            let token = &header[7..];
            debug!("Validating JWT token");

            match token_service.validate_token(token) {
                Ok(claims) => match identity_from_claims(&claims) {
                    Some(identity) => {
                        let mut request = request;
                        request.extensions_mut().insert(identity);
                        Ok(next.run(request).await)
                    }
                    None => {
                        warn!("Token carries invalid identity claims");
                        Err(StatusCode::UNAUTHORIZED)
                    }
                },
                Err(e) => {
                    warn!(error = %e, "Token validation failed");
                    Err(StatusCode::UNAUTHORIZED)
                }
            }
        }
        Some(_) => {
            warn!("Malformed authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
