use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LikeRequest {
    pub product_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikeResponse {
    pub message: String,
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikedProducts {
    pub liked_products: Vec<Product>,
    pub total_count: i64,
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikeStatus {
    pub product_id: i64,
    pub liked: bool,
}
