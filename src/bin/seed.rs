use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use chrono::Duration;
use product_like_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
    token::TokenCodec,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, 2).await?;
    run_migrations(&pool).await?;

    let user_id = ensure_user(&pool, "Demo User", "user@example.com", "user123").await?;
    seed_products(&pool).await?;

    let tokens = TokenCodec::new(&config.jwt_secret, Duration::hours(config.jwt_ttl_hours));
    let token = tokens.issue(user_id)?;

    println!("Seed completed. User ID: {user_id}");
    println!("Authorization: Bearer {token}");
    Ok(())
}

async fn ensure_user(
    pool: &DbPool,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i64> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let (user_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO UPDATE
            SET password_hash = EXCLUDED.password_hash, deleted_at = NULL, updated_at = NOW()
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {email} (password={password})");
    Ok(user_id)
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<()> {
    let products = [
        ("Ferris Plush", "Soft crab for your desk", 150_000_i64),
        ("Borrow Checker Mug", "Holds exactly one mutable coffee", 120_000),
        ("Lifetime Sticker Pack", "Stickers that outlive their laptop", 50_000),
        ("Async Runtime Hoodie", "Keeps you warm while you await", 550_000),
    ];

    for (name, description, origin_price) in products {
        sqlx::query(
            r#"
            INSERT INTO products (name, description, origin_price, discounted_price)
            SELECT $1, $2, $3, $3
            WHERE NOT EXISTS (SELECT 1 FROM products WHERE name = $1)
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(origin_price)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
