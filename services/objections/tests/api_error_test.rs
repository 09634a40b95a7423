//! HTTP 错误渲染测试

use axum::http::StatusCode;
use axum::response::IntoResponse;
use civix_errors::AppError;

use objection_service::api::http::ApiError;

async fn problem_body(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = ApiError(err).into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_status_mapping() {
    let cases = [
        (AppError::validation("missing field"), 400),
        (AppError::unauthorized("bad token"), 401),
        (AppError::forbidden("not authority"), 403),
        (AppError::not_found("no such objection"), 404),
        (AppError::conflict("already resolved"), 409),
    ];

    for (err, expected) in cases {
        let (status, body) = problem_body(err).await;
        assert_eq!(status.as_u16(), expected);
        assert_eq!(body["status"], expected);
    }
}

#[tokio::test]
async fn test_problem_document_shape() {
    let (status, body) = problem_body(AppError::conflict("Objection is already resolved")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["title"], "Conflict");
    assert_eq!(body["type"], "https://api.civix.io/problems/conflict");
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .contains("already resolved")
    );
}

#[tokio::test]
async fn test_database_errors_are_opaque() {
    let (status, body) =
        problem_body(AppError::database("connection refused at 10.0.0.3:5432")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // 内部细节不得出现在响应里
    let rendered = body.to_string();
    assert!(!rendered.contains("10.0.0.3"));
    assert!(!rendered.contains("connection refused"));
}

#[tokio::test]
async fn test_internal_errors_are_opaque() {
    let (status, body) = problem_body(AppError::internal("argon2 parameter mismatch")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("argon2"));
}
