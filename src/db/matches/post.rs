use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::matches::{Match, MatchEvent, NewMatch},
};

pub async fn create_match(
    team_id: Uuid,
    match_data: NewMatch,
    postgres: PgPool,
) -> Result<Match, AppError> {
    if match_data.opponent.trim().is_empty() {
        return Err(AppError::Validation("Opponent is required".into()));
    }

    let now = Utc::now();

    let created = sqlx::query_as::<_, Match>(
        "INSERT INTO matches (team_id, opponent, match_date, venue, competition, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, 'scheduled', $6, $6)
        RETURNING *",
    )
    .bind(team_id)
    .bind(&match_data.opponent)
    .bind(match_data.match_date)
    .bind(&match_data.venue)
    .bind(&match_data.competition)
    .bind(now)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create match: {}", e)))?;

    tracing::info!("Created match {} for team {}", created.id, team_id);

    Ok(created)
}

pub async fn add_match_event(
    match_id: Uuid,
    player_id: Option<Uuid>,
    event_type: String,
    minute: i32,
    detail: Option<String>,
    postgres: PgPool,
) -> Result<MatchEvent, AppError> {
    let event = sqlx::query_as::<_, MatchEvent>(
        "INSERT INTO match_events (match_id, player_id, event_type, minute, detail)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, match_id, player_id, event_type, minute, detail, NULL AS player_name",
    )
    .bind(match_id)
    .bind(player_id)
    .bind(&event_type)
    .bind(minute)
    .bind(&detail)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to add match event: {}", e)))?;

    Ok(event)
}
