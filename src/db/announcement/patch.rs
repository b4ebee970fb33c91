use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::announcement::{Announcement, Priority},
};

pub async fn update_announcement(
    announcement_id: Uuid,
    title: Option<String>,
    content: Option<String>,
    priority: Option<Priority>,
    expires_at: Option<DateTime<Utc>>,
    postgres: PgPool,
) -> Result<Announcement, AppError> {
    let announcement = sqlx::query_as::<_, Announcement>(
        "UPDATE announcements
        SET title = COALESCE($2, title),
            content = COALESCE($3, content),
            priority = COALESCE($4, priority),
            expires_at = COALESCE($5, expires_at),
            updated_at = $6
        WHERE id = $1
        RETURNING *, NULL AS author_name",
    )
    .bind(announcement_id)
    .bind(&title)
    .bind(&content)
    .bind(priority)
    .bind(expires_at)
    .bind(Utc::now())
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update announcement: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Announcement not found".into()))?;

    Ok(announcement)
}

pub async fn toggle_pin(
    announcement_id: Uuid,
    is_pinned: bool,
    postgres: PgPool,
) -> Result<Announcement, AppError> {
    let announcement = sqlx::query_as::<_, Announcement>(
        "UPDATE announcements
        SET is_pinned = $2, updated_at = $3
        WHERE id = $1
        RETURNING *, NULL AS author_name",
    )
    .bind(announcement_id)
    .bind(is_pinned)
    .bind(Utc::now())
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to toggle pin: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Announcement not found".into()))?;

    Ok(announcement)
}
