use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::{
    error::{AppError, AuthError},
    state::AppState,
    store::users,
};

/// Identity of the caller, resolved from a verified bearer token and an
/// existing user row. Handlers take it as an argument to require auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
}

/// Pull the token out of `Authorization`. The `Bearer` scheme is stripped when present.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader)?
        .trim();

    let token = match raw.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        None if raw.eq_ignore_ascii_case("bearer") => "",
        _ => raw,
    };

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let user_id = state.tokens.verify(token)?;

        let user = users::find_active_by_id(&state.pool, user_id)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
        })
    }
}
