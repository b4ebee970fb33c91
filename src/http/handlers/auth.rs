use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{AuthClaims, generate_jwt},
    db::user::{create_user, get_profile, update_profile, verify_credentials},
    models::UserProfile,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpPayload {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct SignInPayload {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub profile: UserProfile,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignUpPayload>,
) -> Result<Json<SessionResponse>, (StatusCode, String)> {
    let profile = create_user(
        payload.email,
        payload.password,
        payload.full_name,
        payload.role,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating account: {}", e);
        e.to_response()
    })?;

    let token = generate_jwt(&profile).map_err(|e| e.to_response())?;

    tracing::info!("Account created for {}", profile.email);

    Ok(Json(SessionResponse { token, profile }))
}

pub async fn signin_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignInPayload>,
) -> Result<Json<SessionResponse>, (StatusCode, String)> {
    let profile = verify_credentials(&payload.email, &payload.password, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::warn!("Failed signin attempt for {}", payload.email);
            e.to_response()
        })?;

    let token = generate_jwt(&profile).map_err(|e| e.to_response())?;

    tracing::info!("User signed in: {}", profile.email);

    Ok(Json(SessionResponse { token, profile }))
}

/// Tokens are stateless, so signing out is the client discarding its
/// token; the endpoint exists so the flow has an explicit end.
pub async fn signout_handler(claims: AuthClaims) -> StatusCode {
    tracing::info!("User signed out: {}", claims.0.email);
    StatusCode::NO_CONTENT
}

pub async fn me_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let profile = get_profile(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching profile: {}", e);
            e.to_response()
        })?;

    Ok(Json(profile))
}

pub async fn update_profile_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let profile = update_profile(
        user_id,
        payload.full_name,
        payload.avatar_url,
        payload.phone,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating profile: {}", e);
        e.to_response()
    })?;

    Ok(Json(profile))
}
