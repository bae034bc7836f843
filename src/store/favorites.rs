use crate::{db::DbPool, error::AppResult, models::Product};

/// True iff `user_id` has a favorite row for `product_id`.
pub async fn exists(pool: &DbPool, user_id: i64, product_id: i64) -> AppResult<bool> {
    let found: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND product_id = $2)",
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_one(pool)
    .await?;
    Ok(found)
}

/// Insert a favorite stamped with the current time.
///
/// Returns `None` when the pair is already present; the unique
/// `(user_id, product_id)` constraint makes this the duplicate signal.
pub async fn insert(pool: &DbPool, user_id: i64, product_id: i64) -> AppResult<Option<i64>> {
    let id: Option<i64> = sqlx::query_scalar(
        r#"
        INSERT INTO favorites (user_id, product_id, created_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (user_id, product_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_optional(pool)
    .await?;
    Ok(id)
}

/// Delete the pair's favorite, returning rows affected (0 means nothing to delete).
pub async fn delete(pool: &DbPool, user_id: i64, product_id: i64) -> AppResult<u64> {
    let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND product_id = $2")
        .bind(user_id)
        .bind(product_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// One page of the user's liked products, oldest like first, plus the
/// unpaginated favorite count.
pub async fn list_paged(
    pool: &DbPool,
    user_id: i64,
    limit: i64,
    offset: i64,
) -> AppResult<(Vec<Product>, i64)> {
    let products = sqlx::query_as::<_, Product>(
        r#"
        SELECT p.id, p.shop_id, p.name, p.description, p.thumbnail_url,
               p.origin_price, p.discounted_price, p.discounted_rate, p.status,
               p.in_stock, p.is_preorder, p.is_purchasable,
               p.delivery_condition, p.delivery_display, p.created_at, p.updated_at
        FROM favorites f
        JOIN products p ON p.id = f.product_id
        WHERE f.user_id = $1
        ORDER BY f.created_at ASC, f.id ASC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total = count(pool, user_id).await?;

    Ok((products, total))
}

pub async fn count(pool: &DbPool, user_id: i64) -> AppResult<i64> {
    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorites WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(total.0)
}
