use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::{AppError, AppResult, AuthError},
    state::AppState,
    store::users,
};

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;
    let user = users::find_active_by_email(&state.pool, email.as_str())
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    if Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(user.id)?;
    tracing::info!(user_id = user.id, "user logged in");

    Ok(LoginResponse {
        token,
        token_type: "Bearer".into(),
        expires_in: state.tokens.ttl_seconds(),
    })
}
