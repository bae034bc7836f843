use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// 1-indexed page number, default 1.
    pub page: Option<i64>,
    /// Page size, default 10, capped at 100.
    pub limit: Option<i64>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Apply defaults and reject non-positive values.
    pub fn validate(&self) -> AppResult<PageRequest> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        if page <= 0 {
            return Err(AppError::BadRequest("Invalid page parameter".into()));
        }
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit <= 0 {
            return Err(AppError::BadRequest("Invalid limit parameter".into()));
        }
        let limit = limit.min(MAX_LIMIT);
        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| AppError::BadRequest("Invalid page parameter".into()))?;

        Ok(PageRequest {
            page,
            limit,
            offset,
        })
    }
}
