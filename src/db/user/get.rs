use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{auth, errors::AppError, models::UserProfile};

const PROFILE_COLUMNS: &str = "id, email, full_name, role, avatar_url, phone, created_at";

#[derive(FromRow)]
struct CredentialRow {
    id: Uuid,
    password_hash: String,
}

pub async fn get_profile(user_id: Uuid, postgres: PgPool) -> Result<UserProfile, AppError> {
    let profile = sqlx::query_as::<_, UserProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE id = $1"
    ))
    .bind(user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user profile: {}", e)))?
    .ok_or_else(|| AppError::NotFound("User profile not found".into()))?;

    Ok(profile)
}

/// Check an email/password pair and return the matching profile. A
/// wrong email and a wrong password fail the same way.
pub async fn verify_credentials(
    email: &str,
    password: &str,
    postgres: PgPool,
) -> Result<UserProfile, AppError> {
    let credentials = sqlx::query_as::<_, CredentialRow>(
        "SELECT id, password_hash FROM user_profiles WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch credentials: {}", e)))?;

    let Some(credentials) = credentials else {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    };

    if !auth::verify_password(password, &credentials.password_hash) {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    get_profile(credentials.id, postgres).await
}
