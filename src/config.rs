use std::env;

use anyhow::{Context, bail};

const MAX_TOKEN_TTL_HOURS: i64 = 24 * 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(10);

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET is not set")?;
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let jwt_ttl_hours = match env::var("JWT_TTL_HOURS") {
            Ok(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("JWT_TTL_HOURS is not a number: {raw}"))?,
            Err(_) => 24,
        };
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&jwt_ttl_hours) {
            bail!("JWT_TTL_HOURS must be between 1 and {MAX_TOKEN_TTL_HOURS}");
        }

        Ok(Self {
            port,
            database_url,
            host,
            max_connections,
            jwt_secret,
            jwt_ttl_hours,
        })
    }
}
