use std::sync::Arc;

use crate::{
    db::{DbPool, OrmConn, orm_from_pool},
    token::TokenCodec,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub tokens: Arc<TokenCodec>,
}

impl AppState {
    pub fn new(pool: DbPool, tokens: TokenCodec) -> Self {
        let orm = orm_from_pool(&pool);
        Self {
            pool,
            orm,
            tokens: Arc::new(tokens),
        }
    }
}
