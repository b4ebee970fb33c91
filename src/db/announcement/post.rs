use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::announcement::{Announcement, Priority},
};

pub async fn create_announcement(
    team_id: Uuid,
    author_id: Uuid,
    title: String,
    content: String,
    priority: Priority,
    expires_at: Option<DateTime<Utc>>,
    postgres: PgPool,
) -> Result<Announcement, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("Announcement title is required".into()));
    }

    let now = Utc::now();

    let announcement = sqlx::query_as::<_, Announcement>(
        "INSERT INTO announcements (team_id, author_id, title, content, priority, is_pinned, expires_at, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7, $7)
        RETURNING *, NULL AS author_name",
    )
    .bind(team_id)
    .bind(author_id)
    .bind(&title)
    .bind(&content)
    .bind(priority)
    .bind(expires_at)
    .bind(now)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create announcement: {}", e)))?;

    tracing::info!(
        "Created announcement {} for team {}",
        announcement.id,
        team_id
    );

    Ok(announcement)
}
