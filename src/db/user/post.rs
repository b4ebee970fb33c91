use sqlx::PgPool;

use crate::{auth, errors::AppError, models::UserProfile};

/// Register a new account. The display name falls back to the local
/// part of the email and the role to player, as the sign-up form does.
pub async fn create_user(
    email: String,
    password: String,
    full_name: Option<String>,
    role: Option<String>,
    postgres: PgPool,
) -> Result<UserProfile, AppError> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(AppError::Validation("A valid email is required".into()));
    }
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }

    let full_name = full_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());
    let role = role.unwrap_or_else(|| "player".to_string());
    let password_hash = auth::hash_password(&password);

    let profile = sqlx::query_as::<_, UserProfile>(
        "INSERT INTO user_profiles (email, full_name, role, password_hash)
        VALUES ($1, $2, $3, $4)
        RETURNING id, email, full_name, role, avatar_url, phone, created_at",
    )
    .bind(&email)
    .bind(&full_name)
    .bind(&role)
    .bind(&password_hash)
    .fetch_one(&postgres)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::BadRequest("An account with this email already exists".into())
        }
        other => AppError::DatabaseError(format!("Failed to create user: {}", other)),
    })?;

    tracing::info!("Created user {} ({})", profile.id, profile.email);

    Ok(profile)
}
