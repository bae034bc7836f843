use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        likes::{LikeRequest, LikeResponse, LikeStatus, LikedProducts},
        products::{CreateProductRequest, ProductCreated, ProductList, UpdateProductRequest},
    },
    models::{Favorite, Product},
    response::{ErrorResponse, MessageResponse},
    routes::{auth, health, likes, params, products},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        likes::like_product,
        likes::cancel_like,
        likes::list_liked_products,
        likes::like_status,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product
    ),
    components(
        schemas(
            Product,
            Favorite,
            LoginRequest,
            LoginResponse,
            LikeRequest,
            LikeResponse,
            LikeStatus,
            LikedProducts,
            CreateProductRequest,
            UpdateProductRequest,
            ProductCreated,
            ProductList,
            params::Pagination,
            ErrorResponse,
            MessageResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Likes", description = "Product like endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
