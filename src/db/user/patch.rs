use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::UserProfile};

pub async fn update_profile(
    user_id: Uuid,
    full_name: Option<String>,
    avatar_url: Option<String>,
    phone: Option<String>,
    postgres: PgPool,
) -> Result<UserProfile, AppError> {
    let profile = sqlx::query_as::<_, UserProfile>(
        "UPDATE user_profiles
        SET full_name = COALESCE($2, full_name),
            avatar_url = COALESCE($3, avatar_url),
            phone = COALESCE($4, phone)
        WHERE id = $1
        RETURNING id, email, full_name, role, avatar_url, phone, created_at",
    )
    .bind(user_id)
    .bind(&full_name)
    .bind(&avatar_url)
    .bind(&phone)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update profile: {}", e)))?
    .ok_or_else(|| AppError::NotFound("User profile not found".into()))?;

    Ok(profile)
}
