//! 异议路由

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
};
use civix_cqrs_core::{CommandHandler, QueryHandler};
use civix_errors::AppError;
use serde::{Deserialize, Serialize};

use crate::application::commands::objection::{
    ApproveObjectionCommand, MarkPendingApprovalCommand, SubmitObjectionCommand,
};
use crate::application::dto::{ObjectionDto, ResolvedObjectionDto};
use crate::application::queries::{GetObjectionQuery, ListObjectionsQuery, ListResolvedQuery};
use crate::domain::entities::ObjectionStatus;

use super::error::ApiResult;
use super::extractors::{AuthIdentity, OptionalIdentity, auth_middleware};
use super::state::AppState;

pub fn objection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/objections",
            get(list_objections).post(submit_objection),
        )
        .route("/api/objections/resolved", get(list_resolved))
        .route("/api/objections/{id}", get(get_objection))
        .route("/api/objections/{id}/resolve", patch(mark_pending_approval))
        .route("/api/objections/{id}/approve", patch(approve))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// 列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListObjectionsParams {
    pub status: Option<String>,
}

async fn list_objections(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Query(params): Query<ListObjectionsParams>,
) -> ApiResult<Json<Vec<ObjectionDto>>> {
    // 状态过滤只接受精确匹配
    let status = match params.status.as_deref() {
        None => None,
        Some(raw) => Some(
            ObjectionStatus::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Unknown status: {}", raw)))?,
        ),
    };

    let objections = state
        .list_objections_handler
        .handle(ListObjectionsQuery { identity, status })
        .await?;

    Ok(Json(objections))
}

async fn list_resolved(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
) -> ApiResult<Json<Vec<ResolvedObjectionDto>>> {
    let resolved = state
        .list_resolved_handler
        .handle(ListResolvedQuery { identity })
        .await?;

    Ok(Json(resolved))
}

async fn get_objection(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<i64>,
) -> ApiResult<Json<ObjectionDto>> {
    let objection = state
        .get_objection_handler
        .handle(GetObjectionQuery {
            identity,
            objection_id: id,
        })
        .await?;

    Ok(Json(objection))
}

/// 提交异议请求
///
/// 字段用 Option 接收，在边界校验后返回 400 而非框架默认的 422。
#[derive(Debug, Deserialize)]
pub struct SubmitObjectionRequest {
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub objection_type: Option<String>,
}

/// 提交响应
#[derive(Debug, Serialize)]
pub struct SubmitObjectionResponse {
    pub id: i64,
}

async fn submit_objection(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Json(req): Json<SubmitObjectionRequest>,
) -> ApiResult<(StatusCode, Json<SubmitObjectionResponse>)> {
    let description = req
        .description
        .ok_or_else(|| AppError::validation("description is required"))?;
    let latitude = req
        .latitude
        .ok_or_else(|| AppError::validation("latitude is required"))?;
    let longitude = req
        .longitude
        .ok_or_else(|| AppError::validation("longitude is required"))?;
    let image_url = req
        .image_url
        .ok_or_else(|| AppError::validation("image_url is required"))?;
    let objection_type = req
        .objection_type
        .ok_or_else(|| AppError::validation("objection_type is required"))?;

    let result = state
        .submit_handler
        .handle(SubmitObjectionCommand {
            description,
            latitude,
            longitude,
            image_url,
            objection_type,
            submitter: identity.map(|i| i.user_id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitObjectionResponse { id: result.id }),
    ))
}

async fn mark_pending_approval(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .mark_pending_approval_handler
        .handle(MarkPendingApprovalCommand {
            objection_id: id,
            identity,
        })
        .await?;

    Ok(StatusCode::OK)
}

async fn approve(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .approve_handler
        .handle(ApproveObjectionCommand {
            objection_id: id,
            identity,
        })
        .await?;

    Ok(StatusCode::OK)
}
