//! HTTP 错误渲染

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use civix_errors::AppError;

/// API 错误包装
///
/// 渲染为 RFC 7807 Problem Details 文档。
#[derive(Debug)]
pub struct ApiError(pub AppError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 持久层/内部错误记录日志后以不透明 500 返回，不泄露内部细节
        let err = match self.0 {
            AppError::Database(msg) | AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal failure");
                AppError::internal("Internal server error")
            }
            other => other,
        };

        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(err.to_problem_details())).into_response()
    }
}
