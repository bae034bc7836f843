use crate::{
    dto::likes::{LikeRequest, LikeResponse, LikeStatus, LikedProducts},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    routes::params::Pagination,
    state::AppState,
    store::{favorites, products},
};

pub const LIKED_MESSAGE: &str = "Product liked successfully";
pub const UNLIKED_MESSAGE: &str = "Product like canceled successfully";
pub const ALREADY_LIKED: &str = "User already liked the product";
pub const NOT_LIKED: &str = "User has not liked the product";

pub async fn like_product(
    state: &AppState,
    user: &AuthUser,
    payload: LikeRequest,
) -> AppResult<LikeResponse> {
    if !products::exists(&state.orm, payload.product_id).await? {
        return Err(AppError::NotFound("Product not found".into()));
    }

    let favorite_id = favorites::insert(&state.pool, user.user_id, payload.product_id)
        .await?
        .ok_or_else(|| AppError::Conflict(ALREADY_LIKED.into()))?;

    tracing::info!(
        user_id = user.user_id,
        product_id = payload.product_id,
        favorite_id,
        "product liked"
    );

    Ok(LikeResponse {
        message: LIKED_MESSAGE.into(),
        user_id: user.user_id,
    })
}

pub async fn unlike_product(
    state: &AppState,
    user: &AuthUser,
    payload: LikeRequest,
) -> AppResult<LikeResponse> {
    let removed = favorites::delete(&state.pool, user.user_id, payload.product_id).await?;
    if removed == 0 {
        return Err(AppError::Conflict(NOT_LIKED.into()));
    }

    tracing::info!(
        user_id = user.user_id,
        product_id = payload.product_id,
        "product like canceled"
    );

    Ok(LikeResponse {
        message: UNLIKED_MESSAGE.into(),
        user_id: user.user_id,
    })
}

pub async fn list_liked_products(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<LikedProducts> {
    let page = pagination.validate()?;
    let (liked_products, total_count) =
        favorites::list_paged(&state.pool, user.user_id, page.limit, page.offset).await?;

    Ok(LikedProducts {
        liked_products,
        total_count,
        page: page.page,
        limit: page.limit,
    })
}

pub async fn like_status(state: &AppState, user: &AuthUser, product_id: i64) -> AppResult<LikeStatus> {
    let liked = favorites::exists(&state.pool, user.user_id, product_id).await?;
    Ok(LikeStatus { product_id, liked })
}
