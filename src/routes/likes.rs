use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    routing::{get, post},
};

use crate::{
    dto::likes::{LikeRequest, LikeResponse, LikeStatus, LikedProducts},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ErrorResponse,
    routes::params::Pagination,
    services::like_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/like-product", post(like_product))
        .route("/cancel-like", post(cancel_like).delete(cancel_like))
        .route("/liked-products", get(list_liked_products))
        .route("/liked-products/{product_id}", get(like_status))
}

#[utoipa::path(
    post,
    path = "/api/like-product",
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Product liked", body = LikeResponse),
        (status = 400, description = "Already liked or malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn like_product(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> AppResult<Json<LikeResponse>> {
    let Json(payload) = payload?;
    let resp = like_service::like_product(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cancel-like",
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Like canceled", body = LikeResponse),
        (status = 400, description = "Not liked or malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn cancel_like(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> AppResult<Json<LikeResponse>> {
    let Json(payload) = payload?;
    let resp = like_service::unlike_product(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/liked-products",
    params(Pagination),
    responses(
        (status = 200, description = "Products liked by the caller", body = LikedProducts),
        (status = 400, description = "Invalid page or limit", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn list_liked_products(
    State(state): State<AppState>,
    user: AuthUser,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> AppResult<Json<LikedProducts>> {
    let Query(pagination) = pagination?;
    let resp = like_service::list_liked_products(&state, &user, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/liked-products/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Whether the caller likes the product", body = LikeStatus),
        (status = 400, description = "Invalid product id", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn like_status(
    State(state): State<AppState>,
    user: AuthUser,
    product_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<LikeStatus>> {
    let Path(product_id) = product_id?;
    let resp = like_service::like_status(&state, &user, product_id).await?;
    Ok(Json(resp))
}
