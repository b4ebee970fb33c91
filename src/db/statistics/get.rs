use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{
        matches::Match,
        statistics::{PlayerStatistics, RankedPlayerStats, SeasonSummary},
    },
    views,
};

pub async fn get_player_statistics(
    player_id: Uuid,
    team_id: Option<Uuid>,
    season: Option<String>,
    postgres: PgPool,
) -> Result<Vec<PlayerStatistics>, AppError> {
    let stats = sqlx::query_as::<_, PlayerStatistics>(
        "SELECT * FROM player_statistics
        WHERE player_id = $1
          AND ($2::uuid IS NULL OR team_id = $2)
          AND ($3::text IS NULL OR season = $3)
        ORDER BY season DESC",
    )
    .bind(player_id)
    .bind(team_id)
    .bind(season)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch player statistics: {}", e)))?;

    Ok(stats)
}

/// Whole-team statistics for a season, top scorers first.
pub async fn get_team_statistics(
    team_id: Uuid,
    season: &str,
    postgres: PgPool,
) -> Result<Vec<RankedPlayerStats>, AppError> {
    let stats = sqlx::query_as::<_, RankedPlayerStats>(
        "SELECT ps.*, up.full_name, up.avatar_url
        FROM player_statistics ps
        INNER JOIN user_profiles up ON up.id = ps.player_id
        WHERE ps.team_id = $1 AND ps.season = $2
        ORDER BY ps.goals DESC",
    )
    .bind(team_id)
    .bind(season)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team statistics: {}", e)))?;

    Ok(stats)
}

pub async fn get_top_scorers(
    team_id: Uuid,
    season: &str,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<RankedPlayerStats>, AppError> {
    let scorers = sqlx::query_as::<_, RankedPlayerStats>(
        "SELECT ps.*, up.full_name, up.avatar_url
        FROM player_statistics ps
        INNER JOIN user_profiles up ON up.id = ps.player_id
        WHERE ps.team_id = $1 AND ps.season = $2 AND ps.goals > 0
        ORDER BY ps.goals DESC
        LIMIT $3",
    )
    .bind(team_id)
    .bind(season)
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch top scorers: {}", e)))?;

    Ok(scorers)
}

pub async fn get_top_assisters(
    team_id: Uuid,
    season: &str,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<RankedPlayerStats>, AppError> {
    let assisters = sqlx::query_as::<_, RankedPlayerStats>(
        "SELECT ps.*, up.full_name, up.avatar_url
        FROM player_statistics ps
        INNER JOIN user_profiles up ON up.id = ps.player_id
        WHERE ps.team_id = $1 AND ps.season = $2 AND ps.assists > 0
        ORDER BY ps.assists DESC
        LIMIT $3",
    )
    .bind(team_id)
    .bind(season)
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch top assisters: {}", e)))?;

    Ok(assisters)
}

/// Season table line: completed matches and the season's player rows
/// fetched concurrently, then folded through the derivation layer.
pub async fn get_season_summary(
    team_id: Uuid,
    season: &str,
    postgres: PgPool,
) -> Result<SeasonSummary, AppError> {
    let matches_query = async {
        sqlx::query_as::<_, Match>(
            "SELECT * FROM matches WHERE team_id = $1 AND status = 'completed'",
        )
        .bind(team_id)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch completed matches: {}", e)))
    };

    let stats_query = async {
        sqlx::query_as::<_, PlayerStatistics>(
            "SELECT * FROM player_statistics WHERE team_id = $1 AND season = $2",
        )
        .bind(team_id)
        .bind(season)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch player statistics: {}", e)))
    };

    let (matches, player_stats) = tokio::try_join!(matches_query, stats_query)?;

    Ok(views::statistics::season_summary(&matches, &player_stats))
}
