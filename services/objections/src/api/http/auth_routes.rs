//! 认证路由

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use civix_cqrs_core::CommandHandler;
use civix_errors::AppError;
use serde::{Deserialize, Serialize};

use crate::application::commands::auth::{SigninCommand, SignupCommand};
use crate::application::dto::UserDto;

use super::error::ApiResult;
use super::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
}

/// 注册请求
///
/// 字段用 Option 接收，在边界校验后返回 400 而非框架默认的 422。
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// 注册响应
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: String,
}

async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    let email = req
        .email
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("email is required"))?;
    let password = req
        .password
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("password is required"))?;

    let result = state
        .signup_handler
        .handle(SignupCommand {
            name: req.name,
            email,
            password,
            role: req.role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: result.user_id,
        }),
    ))
}

/// 登录请求
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 登录响应
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token: String,
    pub user: UserDto,
}

async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> ApiResult<Json<SigninResponse>> {
    let email = req
        .email
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("email is required"))?;
    let password = req
        .password
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("password is required"))?;

    let result = state
        .signin_handler
        .handle(SigninCommand { email, password })
        .await?;

    Ok(Json(SigninResponse {
        token: result.token,
        user: result.user,
    }))
}
