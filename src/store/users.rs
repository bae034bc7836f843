use crate::{db::DbPool, error::AppResult, models::User};

const USER_COLUMNS: &str = "id, name, email, password_hash, phone, status, created_at, updated_at, deleted_at";

/// Look up a user that has not been soft-deleted.
pub async fn find_active_by_id(pool: &DbPool, id: i64) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_active_by_email(pool: &DbPool, email: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND deleted_at IS NULL"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}
