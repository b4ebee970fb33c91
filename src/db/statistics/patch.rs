use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::statistics::PlayerStatistics};

/// One row per player per team per season; repeated upserts overwrite
/// the counting fields.
pub async fn upsert_player_statistics(
    player_id: Uuid,
    team_id: Uuid,
    season: &str,
    appearances: i32,
    goals: i32,
    assists: i32,
    yellow_cards: i32,
    red_cards: i32,
    postgres: PgPool,
) -> Result<PlayerStatistics, AppError> {
    let stats = sqlx::query_as::<_, PlayerStatistics>(
        "INSERT INTO player_statistics (player_id, team_id, season, appearances, goals, assists, yellow_cards, red_cards, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (player_id, team_id, season) DO UPDATE
        SET appearances = $4, goals = $5, assists = $6, yellow_cards = $7, red_cards = $8, updated_at = $9
        RETURNING *",
    )
    .bind(player_id)
    .bind(team_id)
    .bind(season)
    .bind(appearances)
    .bind(goals)
    .bind(assists)
    .bind(yellow_cards)
    .bind(red_cards)
    .bind(Utc::now())
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to upsert player statistics: {}", e)))?;

    Ok(stats)
}

pub async fn add_goal(
    player_id: Uuid,
    team_id: Uuid,
    season: &str,
    postgres: PgPool,
) -> Result<PlayerStatistics, AppError> {
    bump_counter(player_id, team_id, season, "goals", postgres).await
}

pub async fn add_assist(
    player_id: Uuid,
    team_id: Uuid,
    season: &str,
    postgres: PgPool,
) -> Result<PlayerStatistics, AppError> {
    bump_counter(player_id, team_id, season, "assists", postgres).await
}

async fn bump_counter(
    player_id: Uuid,
    team_id: Uuid,
    season: &str,
    column: &str,
    postgres: PgPool,
) -> Result<PlayerStatistics, AppError> {
    // column comes from the two callers above, never from input
    let query = format!(
        "INSERT INTO player_statistics (player_id, team_id, season, {column}, updated_at)
        VALUES ($1, $2, $3, 1, $4)
        ON CONFLICT (player_id, team_id, season) DO UPDATE
        SET {column} = player_statistics.{column} + 1, updated_at = $4
        RETURNING *"
    );

    let stats = sqlx::query_as::<_, PlayerStatistics>(&query)
        .bind(player_id)
        .bind(team_id)
        .bind(season)
        .bind(Utc::now())
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to increment {}: {}", column, e)))?;

    Ok(stats)
}
