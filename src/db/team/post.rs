use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::team::{Position, TeamMember},
};

pub async fn add_team_member(
    team_id: Uuid,
    user_id: Uuid,
    position: Option<Position>,
    jersey_number: Option<i32>,
    postgres: PgPool,
) -> Result<TeamMember, AppError> {
    let member = sqlx::query_as::<_, TeamMember>(
        "INSERT INTO team_members (team_id, user_id, position, jersey_number, membership_status, is_active, joined_date)
        VALUES ($1, $2, $3, $4, 'active', TRUE, CURRENT_DATE)
        RETURNING id, team_id, user_id, position, jersey_number, membership_status, is_active, joined_date",
    )
    .bind(team_id)
    .bind(user_id)
    .bind(position)
    .bind(jersey_number)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to add team member: {}", e)))?;

    tracing::info!("Added member {} to team {}", member.id, team_id);

    Ok(member)
}
