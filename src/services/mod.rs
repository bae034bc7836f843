pub mod auth_service;
pub mod like_service;
pub mod product_service;
