use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::matches::{Match, MatchEvent},
};

/// Team matches in date order, optionally capped.
pub async fn get_team_matches(
    team_id: Uuid,
    limit: Option<i64>,
    postgres: PgPool,
) -> Result<Vec<Match>, AppError> {
    let matches = sqlx::query_as::<_, Match>(
        "SELECT * FROM matches
        WHERE team_id = $1
        ORDER BY match_date ASC
        LIMIT $2",
    )
    .bind(team_id)
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team matches: {}", e)))?;

    Ok(matches)
}

pub async fn get_upcoming_matches(
    team_id: Uuid,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<Match>, AppError> {
    let matches = sqlx::query_as::<_, Match>(
        "SELECT * FROM matches
        WHERE team_id = $1 AND match_date >= $2
        ORDER BY match_date ASC
        LIMIT $3",
    )
    .bind(team_id)
    .bind(Utc::now())
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch upcoming matches: {}", e)))?;

    Ok(matches)
}

pub async fn get_recent_matches(
    team_id: Uuid,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<Match>, AppError> {
    let matches = sqlx::query_as::<_, Match>(
        "SELECT * FROM matches
        WHERE team_id = $1 AND match_date < $2
        ORDER BY match_date DESC
        LIMIT $3",
    )
    .bind(team_id)
    .bind(Utc::now())
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch recent matches: {}", e)))?;

    Ok(matches)
}

/// The match currently in progress, if there is one. Absence is a
/// normal answer here, not an error.
pub async fn get_live_match(team_id: Uuid, postgres: PgPool) -> Result<Option<Match>, AppError> {
    let live = sqlx::query_as::<_, Match>(
        "SELECT * FROM matches WHERE team_id = $1 AND status = 'live'",
    )
    .bind(team_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch live match: {}", e)))?;

    Ok(live)
}

/// Match timeline joined with player names, minute order.
pub async fn get_match_events(
    match_id: Uuid,
    postgres: PgPool,
) -> Result<Vec<MatchEvent>, AppError> {
    let events = sqlx::query_as::<_, MatchEvent>(
        "SELECT me.id, me.match_id, me.player_id, me.event_type, me.minute, me.detail,
                up.full_name AS player_name
        FROM match_events me
        LEFT JOIN user_profiles up ON up.id = me.player_id
        WHERE me.match_id = $1
        ORDER BY me.minute ASC",
    )
    .bind(match_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch match events: {}", e)))?;

    Ok(events)
}
