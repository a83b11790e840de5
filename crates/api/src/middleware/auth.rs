//! # Authentication Module
//!
//! Password hashing and bearer-token handling for the CourtBook API.
//!
//! Passwords are hashed with Argon2 (random salt per password, default
//! parameters, PHC string format). Login issues an HS256 JWT carrying the
//! user's id and admin flag; authenticated endpoints extract it from the
//! `Authorization: Bearer` header via [`AuthUser`].

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use chrono::{Duration, Utc};
use courtbook_core::errors::CourtError;
use eyre::Result;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Token lifetime; `exp` validation requires a bounded expiry.
const TOKEN_TTL_DAYS: i64 = 7;

/// Hashes a password using the Argon2 algorithm.
///
/// Generates a fresh random salt and returns the hash in PHC string format
/// (algorithm, version, parameters, salt, and hash).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a plain-text password against a stored PHC hash string.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash = argon2::PasswordHash::new(password_hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(is_valid)
}

/// Claims carried by a CourtBook bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub id: i32,
    pub is_admin: bool,
    pub exp: usize,
}

/// Signs a bearer token for the given user.
pub fn issue_token(user_id: i32, is_admin: bool, secret: &str) -> Result<String> {
    let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
    let claims = Claims {
        id: user_id,
        is_admin,
        exp,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| eyre::eyre!("Error signing token: {}", e))?;

    Ok(token)
}

/// Decodes and validates a bearer token, returning its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, CourtError> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| CourtError::Authorization("Invalid token".to_string()))?;

    Ok(data.claims)
}

/// The authenticated caller, extracted from the `Authorization: Bearer`
/// header. A missing header rejects with 401, a token that fails
/// validation with 403.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub is_admin: bool,
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                AppError(CourtError::Authentication(
                    "Access token required".to_string(),
                ))
            })?;

        let claims = decode_token(token, &state.jwt_secret)?;

        Ok(AuthUser {
            id: claims.id,
            is_admin: claims.is_admin,
        })
    }
}

/// Rejects callers without the admin flag.
pub fn ensure_admin(user: &AuthUser) -> Result<(), CourtError> {
    if !user.is_admin {
        return Err(CourtError::Authorization(
            "Admin access required".to_string(),
        ));
    }
    Ok(())
}
