use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::training::{TrainingAttendance, TrainingSession, TrainingSessionUpdate},
};

pub async fn update_session(
    session_id: Uuid,
    updates: TrainingSessionUpdate,
    postgres: PgPool,
) -> Result<TrainingSession, AppError> {
    let session = sqlx::query_as::<_, TrainingSession>(
        "UPDATE training_sessions
        SET title = COALESCE($2, title),
            session_date = COALESCE($3, session_date),
            location = COALESCE($4, location),
            description = COALESCE($5, description),
            updated_at = $6
        WHERE id = $1
        RETURNING *",
    )
    .bind(session_id)
    .bind(&updates.title)
    .bind(updates.session_date)
    .bind(&updates.location)
    .bind(&updates.description)
    .bind(Utc::now())
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update training session: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Training session not found".into()))?;

    Ok(session)
}

/// One attendance mark per player per session; repeated marks replace
/// the previous one.
pub async fn mark_attendance(
    training_id: Uuid,
    player_id: Uuid,
    attended: bool,
    notes: Option<String>,
    postgres: PgPool,
) -> Result<TrainingAttendance, AppError> {
    let record = sqlx::query_as::<_, TrainingAttendance>(
        "INSERT INTO training_attendance (training_id, player_id, attended, notes)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (training_id, player_id) DO UPDATE SET attended = $3, notes = $4
        RETURNING id, training_id, player_id, attended, notes,
                  NULL AS full_name, NULL AS avatar_url",
    )
    .bind(training_id)
    .bind(player_id)
    .bind(attended)
    .bind(&notes)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to mark attendance: {}", e)))?;

    Ok(record)
}
