use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::team::{MembershipStatus, Position, TeamMember},
};

pub async fn update_team_member(
    member_id: Uuid,
    position: Option<Position>,
    jersey_number: Option<i32>,
    membership_status: Option<MembershipStatus>,
    postgres: PgPool,
) -> Result<TeamMember, AppError> {
    let member = sqlx::query_as::<_, TeamMember>(
        "UPDATE team_members
        SET position = COALESCE($2, position),
            jersey_number = COALESCE($3, jersey_number),
            membership_status = COALESCE($4, membership_status)
        WHERE id = $1
        RETURNING id, team_id, user_id, position, jersey_number, membership_status, is_active, joined_date",
    )
    .bind(member_id)
    .bind(position)
    .bind(jersey_number)
    .bind(membership_status)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update team member: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Team member not found".into()))?;

    Ok(member)
}

/// Removal is a deactivation, not a row delete, so the member's match
/// and training history stays attributable.
pub async fn remove_team_member(member_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let rows = sqlx::query("UPDATE team_members SET is_active = FALSE WHERE id = $1")
        .bind(member_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to remove team member: {}", e)))?;

    if rows.rows_affected() == 0 {
        return Err(AppError::NotFound("Team member not found".into()));
    }

    tracing::info!("Deactivated team member {}", member_id);

    Ok(())
}
