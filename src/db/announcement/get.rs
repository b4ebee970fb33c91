use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::announcement::{Announcement, Priority},
};

// Every read joins the author's profile; the board never shows an
// announcement without its author line.

pub async fn get_team_announcements(
    team_id: Uuid,
    limit: Option<i64>,
    postgres: PgPool,
) -> Result<Vec<Announcement>, AppError> {
    let announcements = sqlx::query_as::<_, Announcement>(
        "SELECT a.*, up.full_name AS author_name
        FROM announcements a
        LEFT JOIN user_profiles up ON up.id = a.author_id
        WHERE a.team_id = $1
        ORDER BY a.is_pinned DESC, a.created_at DESC
        LIMIT $2",
    )
    .bind(team_id)
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch announcements: {}", e)))?;

    Ok(announcements)
}

/// Unexpired announcements, pinned first then newest.
pub async fn get_active_announcements(
    team_id: Uuid,
    limit: Option<i64>,
    postgres: PgPool,
) -> Result<Vec<Announcement>, AppError> {
    let announcements = sqlx::query_as::<_, Announcement>(
        "SELECT a.*, up.full_name AS author_name
        FROM announcements a
        LEFT JOIN user_profiles up ON up.id = a.author_id
        WHERE a.team_id = $1 AND (a.expires_at IS NULL OR a.expires_at > $2)
        ORDER BY a.is_pinned DESC, a.created_at DESC
        LIMIT $3",
    )
    .bind(team_id)
    .bind(Utc::now())
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch active announcements: {}", e)))?;

    Ok(announcements)
}

pub async fn get_pinned_announcements(
    team_id: Uuid,
    postgres: PgPool,
) -> Result<Vec<Announcement>, AppError> {
    let announcements = sqlx::query_as::<_, Announcement>(
        "SELECT a.*, up.full_name AS author_name
        FROM announcements a
        LEFT JOIN user_profiles up ON up.id = a.author_id
        WHERE a.team_id = $1 AND a.is_pinned = TRUE
          AND (a.expires_at IS NULL OR a.expires_at > $2)
        ORDER BY a.created_at DESC",
    )
    .bind(team_id)
    .bind(Utc::now())
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch pinned announcements: {}", e)))?;

    Ok(announcements)
}

pub async fn get_announcements_by_priority(
    team_id: Uuid,
    priority: Priority,
    postgres: PgPool,
) -> Result<Vec<Announcement>, AppError> {
    let announcements = sqlx::query_as::<_, Announcement>(
        "SELECT a.*, up.full_name AS author_name
        FROM announcements a
        LEFT JOIN user_profiles up ON up.id = a.author_id
        WHERE a.team_id = $1 AND a.priority = $2
          AND (a.expires_at IS NULL OR a.expires_at > $3)
        ORDER BY a.created_at DESC",
    )
    .bind(team_id)
    .bind(priority)
    .bind(Utc::now())
    .fetch_all(&postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!("Failed to fetch announcements by priority: {}", e))
    })?;

    Ok(announcements)
}
