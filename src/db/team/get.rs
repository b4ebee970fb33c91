use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::team::{RosterPlayer, Team},
};

/// Teams the user holds an active membership in.
pub async fn get_user_teams(user_id: Uuid, postgres: PgPool) -> Result<Vec<Team>, AppError> {
    let teams = sqlx::query_as::<_, Team>(
        "SELECT t.id, t.name, t.league, t.season, t.logo_url, t.description, t.home_venue, t.created_at
        FROM teams t
        INNER JOIN team_members tm ON tm.team_id = t.id
        WHERE tm.user_id = $1 AND tm.is_active = TRUE
        ORDER BY t.name ASC",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user teams: {}", e)))?;

    Ok(teams)
}

pub async fn get_team(team_id: Uuid, postgres: PgPool) -> Result<Team, AppError> {
    let team = sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Team not found".into()))?;

    Ok(team)
}

/// Active members joined with their profiles, jersey order with the
/// unnumbered at the end.
pub async fn get_team_members(
    team_id: Uuid,
    postgres: PgPool,
) -> Result<Vec<RosterPlayer>, AppError> {
    let members = sqlx::query_as::<_, RosterPlayer>(
        "SELECT tm.id, tm.user_id, up.full_name, up.email, up.role, up.avatar_url, up.phone,
                tm.position, tm.jersey_number, tm.membership_status, tm.joined_date
        FROM team_members tm
        INNER JOIN user_profiles up ON up.id = tm.user_id
        WHERE tm.team_id = $1 AND tm.is_active = TRUE
        ORDER BY tm.jersey_number ASC NULLS LAST",
    )
    .bind(team_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team members: {}", e)))?;

    Ok(members)
}
