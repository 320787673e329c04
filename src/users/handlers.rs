use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{extractor::AuthUser, jwt::JwtKeys, password::Hasher},
    error::ApiError,
    state::AppState,
    users::{
        dto::{LoginRequest, RegisterRequest, TokenResponse, UpdateProfileRequest, UserResponse},
        repo::User,
    },
};

/// Argon2 is CPU-bound; run it off the request workers.
async fn hash_blocking(hasher: Hasher, plain: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || hasher.hash(&plain))
        .await
        .map_err(anyhow::Error::from)?
        .map_err(ApiError::Internal)
}

async fn verify_blocking(hasher: Hasher, plain: String, hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || hasher.verify(&plain, &hash))
        .await
        .map_err(anyhow::Error::from)?
        .map_err(ApiError::Internal)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let hash = hash_blocking(state.hasher.clone(), payload.password).await?;
    let user = User::create(&state.db, &payload.username, &payload.email, &hash).await?;

    info!(user_id = %user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User registered successfully",
            user: user.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!("login with unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let ok = verify_blocking(state.hasher.clone(), payload.password, user.password_hash).await?;
    if !ok {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = JwtKeys::from_ref(&state).sign(user.id)?;
    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(UserResponse {
        message: "User profile",
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let password_hash = match payload.password {
        Some(plain) => Some(hash_blocking(state.hasher.clone(), plain).await?),
        None => None,
    };

    let user = User::update(
        &state.db,
        user_id,
        payload.username.as_deref(),
        payload.email.as_deref(),
        password_hash.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound("User"))?;

    info!(user_id = %user.id, "profile updated");
    Ok(Json(UserResponse {
        message: "Profile updated successfully",
        user: user.into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::delete(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    info!(user_id = %user.id, "account deleted");
    Ok(Json(UserResponse {
        message: "Account deleted successfully",
        user: user.into(),
    }))
}
