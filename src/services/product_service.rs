use crate::{
    dto::products::{CreateProductRequest, ProductCreated, ProductList, UpdateProductRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Product,
    response::MessageResponse,
    state::AppState,
    store::products,
};

fn not_found() -> AppError {
    AppError::NotFound("Product not found".into())
}

pub async fn list_products(state: &AppState) -> AppResult<ProductList> {
    let products = products::list_all(&state.orm).await?;
    Ok(ProductList { products })
}

pub async fn get_product(state: &AppState, id: i64) -> AppResult<Product> {
    products::find_by_id(&state.orm, id)
        .await?
        .ok_or_else(not_found)
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ProductCreated> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if payload.origin_price < 0 {
        return Err(AppError::BadRequest("origin_price must not be negative".into()));
    }

    let product_id = products::create(&state.orm, payload).await?;
    tracing::info!(user_id = user.user_id, product_id, "product created");

    Ok(ProductCreated {
        message: "Product created successfully".into(),
        product_id,
    })
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdateProductRequest,
) -> AppResult<MessageResponse> {
    if payload.price.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }

    let updated = products::update(&state.orm, id, payload).await?;
    if updated == 0 {
        return Err(not_found());
    }
    tracing::info!(user_id = user.user_id, product_id = id, "product updated");

    Ok(MessageResponse::new("Product updated successfully"))
}

pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<MessageResponse> {
    let deleted = products::delete(&state.orm, id).await?;
    if deleted == 0 {
        return Err(not_found());
    }
    tracing::info!(user_id = user.user_id, product_id = id, "product deleted");

    Ok(MessageResponse::new("Product deleted successfully"))
}
