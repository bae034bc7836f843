mod common;

use axum::http::StatusCode;
use product_like_api::{
    dto::{
        auth::LoginRequest,
        likes::LikeRequest,
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::{AppError, AuthError},
    routes::create_app,
    services::{auth_service, like_service, product_service},
    store::favorites,
};
use tower::ServiceExt;

use common::{body_json, create_user, db_state, json_request, unique_email};

#[tokio::test]
async fn product_crud_flow() -> anyhow::Result<()> {
    let Some(state) = db_state().await? else {
        return Ok(());
    };
    let user = create_user(&state, &unique_email("catalog"), "secret").await?;

    let created = product_service::create_product(
        &state,
        &user,
        CreateProductRequest {
            name: "Ferris Lamp".into(),
            description: "Glows orange".into(),
            origin_price: 9900,
        },
    )
    .await?;
    assert_eq!(created.message, "Product created successfully");
    let id = created.product_id;

    let listed = product_service::list_products(&state).await?;
    assert!(listed.products.iter().any(|p| p.id == id));

    // Only the name changes; the other fields keep their stored values.
    product_service::update_product(
        &state,
        &user,
        id,
        UpdateProductRequest {
            name: Some("Ferris Lamp XL".into()),
            ..Default::default()
        },
    )
    .await?;
    let product = product_service::get_product(&state, id).await?;
    assert_eq!(product.name, "Ferris Lamp XL");
    assert_eq!(product.description, "Glows orange");
    assert_eq!(product.origin_price, 9900);

    product_service::update_product(
        &state,
        &user,
        id,
        UpdateProductRequest {
            price: Some(12000),
            ..Default::default()
        },
    )
    .await?;
    let product = product_service::get_product(&state, id).await?;
    assert_eq!(product.name, "Ferris Lamp XL");
    assert_eq!(product.origin_price, 12000);

    let err = product_service::update_product(&state, &user, -1, UpdateProductRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "{err:?}");

    // Deleting a liked product takes its favorites with it.
    like_service::like_product(&state, &user, LikeRequest { product_id: id }).await?;
    let deleted = product_service::delete_product(&state, &user, id).await?;
    assert_eq!(deleted.message, "Product deleted successfully");
    assert_eq!(favorites::count(&state.pool, user.user_id).await?, 0);

    let err = product_service::delete_product(&state, &user, id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "{err:?}");

    let err = product_service::get_product(&state, id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "{err:?}");

    Ok(())
}

#[tokio::test]
async fn http_product_status_codes() -> anyhow::Result<()> {
    let Some(state) = db_state().await? else {
        return Ok(());
    };
    let user = create_user(&state, &unique_email("catalog-http"), "secret").await?;
    let token = state.tokens.issue(user.user_id)?;
    let app = create_app(state);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/products",
            Some(&token),
            serde_json::json!({ "name": "Crab Socks", "description": "Ten toes", "origin_price": 3000 }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["product_id"].as_i64().expect("product id");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/products/{id}"),
            Some(&token),
            serde_json::json!({ "description": "Eight toes" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/products/not-a-number",
            Some(&token),
            serde_json::json!({ "name": "x" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/products/{id}"),
            Some(&token),
            serde_json::json!({}),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/api/products/{id}"),
            Some(&token),
            serde_json::json!({}),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn login_issues_verifiable_token() -> anyhow::Result<()> {
    let Some(state) = db_state().await? else {
        return Ok(());
    };
    let email = unique_email("login");
    let user = create_user(&state, &email, "correct horse").await?;

    let resp = auth_service::login_user(
        &state,
        LoginRequest {
            email: email.clone(),
            password: "correct horse".into(),
        },
    )
    .await?;
    assert_eq!(resp.token_type, "Bearer");
    assert_eq!(state.tokens.verify(&resp.token), Ok(user.user_id));

    let err = auth_service::login_user(
        &state,
        LoginRequest {
            email,
            password: "wrong".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(AuthError::InvalidCredentials)));

    Ok(())
}
