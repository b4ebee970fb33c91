use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::matches::{Match, MatchUpdate},
};

pub async fn update_match(
    match_id: Uuid,
    updates: MatchUpdate,
    postgres: PgPool,
) -> Result<Match, AppError> {
    let updated = sqlx::query_as::<_, Match>(
        "UPDATE matches
        SET opponent = COALESCE($2, opponent),
            match_date = COALESCE($3, match_date),
            venue = COALESCE($4, venue),
            competition = COALESCE($5, competition),
            status = COALESCE($6, status),
            team_score = COALESCE($7, team_score),
            opponent_score = COALESCE($8, opponent_score),
            updated_at = $9
        WHERE id = $1
        RETURNING *",
    )
    .bind(match_id)
    .bind(&updates.opponent)
    .bind(updates.match_date)
    .bind(&updates.venue)
    .bind(&updates.competition)
    .bind(updates.status)
    .bind(updates.team_score)
    .bind(updates.opponent_score)
    .bind(Utc::now())
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update match: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Match not found".into()))?;

    Ok(updated)
}
