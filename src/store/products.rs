use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    db::OrmConn,
    dto::products::{CreateProductRequest, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::AppResult,
    models::Product,
};

pub async fn list_all(orm: &OrmConn) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_asc(Column::Id)
        .all(orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(items)
}

pub async fn find_by_id(orm: &OrmConn, id: i64) -> AppResult<Option<Product>> {
    let product = Products::find_by_id(id)
        .one(orm)
        .await?
        .map(product_from_entity);
    Ok(product)
}

pub async fn exists(orm: &OrmConn, id: i64) -> AppResult<bool> {
    Ok(Products::find_by_id(id).one(orm).await?.is_some())
}

/// Insert a product; columns not in the request take their schema defaults.
pub async fn create(orm: &OrmConn, payload: CreateProductRequest) -> AppResult<i64> {
    let active = ActiveModel {
        name: Set(payload.name),
        description: Set(payload.description),
        origin_price: Set(payload.origin_price),
        ..Default::default()
    };
    let product = active.insert(orm).await?;
    Ok(product.id)
}

/// Overwrite only the fields present in `payload`. Returns rows affected.
pub async fn update(orm: &OrmConn, id: i64, payload: UpdateProductRequest) -> AppResult<u64> {
    let mut query = Products::update_many()
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
        .filter(Column::Id.eq(id));

    if let Some(name) = payload.name {
        query = query.col_expr(Column::Name, Expr::value(name));
    }
    if let Some(description) = payload.description {
        query = query.col_expr(Column::Description, Expr::value(description));
    }
    if let Some(price) = payload.price {
        query = query.col_expr(Column::OriginPrice, Expr::value(price));
    }

    let result = query.exec(orm).await?;
    Ok(result.rows_affected)
}

pub async fn delete(orm: &OrmConn, id: i64) -> AppResult<u64> {
    let result = Products::delete_by_id(id).exec(orm).await?;
    Ok(result.rows_affected)
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        shop_id: model.shop_id,
        name: model.name,
        description: model.description,
        thumbnail_url: model.thumbnail_url,
        origin_price: model.origin_price,
        discounted_price: model.discounted_price,
        discounted_rate: model.discounted_rate,
        status: model.status,
        in_stock: model.in_stock,
        is_preorder: model.is_preorder,
        is_purchasable: model.is_purchasable,
        delivery_condition: model.delivery_condition,
        delivery_display: model.delivery_display,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
