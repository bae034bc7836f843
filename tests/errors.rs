use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use product_like_api::error::{AppError, AuthError};

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, serde_json::from_slice(&bytes).expect("json"))
}

#[tokio::test]
async fn auth_errors_are_401() {
    for reason in [
        AuthError::MissingHeader,
        AuthError::Expired,
        AuthError::InvalidSignature,
        AuthError::Malformed,
        AuthError::UnknownUser,
    ] {
        let (status, body) = render(reason.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], reason.to_string());
    }
}

#[tokio::test]
async fn conflicts_are_400_with_message() {
    let (status, body) = render(AppError::Conflict("User already liked the product".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "User already liked the product" }));
}

#[tokio::test]
async fn not_found_is_404() {
    let (status, body) = render(AppError::NotFound("Product not found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn store_errors_hide_detail() {
    let (status, body) = render(AppError::DbError(sqlx::Error::PoolTimedOut)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");

    let (status, body) = render(AppError::Internal(anyhow::anyhow!("secret detail"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
}
