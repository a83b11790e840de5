use axum::{Json, extract::State};
use std::sync::Arc;

use courtbook_core::{
    errors::CourtError,
    models::user::{
        LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
        ResetPasswordRequest, User,
    },
};

use crate::{
    ApiState,
    middleware::{auth, error_handling::AppError},
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    // Reject duplicate accounts
    let existing =
        courtbook_db::repositories::user::get_user_by_email(&state.db_pool, &payload.email)
            .await
            .map_err(CourtError::Database)?;
    if existing.is_some() {
        return Err(AppError(CourtError::Validation(
            "User already exists".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password)?;

    let user = courtbook_db::repositories::user::create_user(
        &state.db_pool,
        &payload.name,
        &payload.email,
        Some(password_hash.as_str()),
        false,
    )
    .await
    .map_err(CourtError::Database)?;

    Ok(Json(RegisterResponse {
        message: "User created successfully".to_string(),
        user_id: user.id,
    }))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = courtbook_db::repositories::user::get_user_by_email(&state.db_pool, &payload.email)
        .await
        .map_err(CourtError::Database)?
        .ok_or_else(|| CourtError::NotFound("User not found".to_string()))?;

    let valid = match &user.password_hash {
        Some(hash) => auth::verify_password(&payload.password, hash)?,
        None => false,
    };
    if !valid {
        return Err(AppError(CourtError::Authentication(
            "Invalid password".to_string(),
        )));
    }

    let token = auth::issue_token(user.id, user.is_admin, &state.jwt_secret)?;

    Ok(Json(LoginResponse {
        token,
        user: User::from(user),
    }))
}

#[axum::debug_handler]
pub async fn reset_password(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = courtbook_db::repositories::user::get_user_by_email(&state.db_pool, &payload.email)
        .await
        .map_err(CourtError::Database)?
        .ok_or_else(|| CourtError::NotFound("User not found".to_string()))?;

    let password_hash = auth::hash_password(&payload.new_password)?;

    courtbook_db::repositories::user::update_password(&state.db_pool, user.id, &password_hash)
        .await
        .map_err(CourtError::Database)?;

    Ok(Json(MessageResponse {
        message: "Password reset successfully".to_string(),
    }))
}
