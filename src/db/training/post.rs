use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::training::{NewTrainingSession, TrainingSession},
};

pub async fn create_session(
    team_id: Uuid,
    session: NewTrainingSession,
    postgres: PgPool,
) -> Result<TrainingSession, AppError> {
    if session.title.trim().is_empty() {
        return Err(AppError::Validation("Session title is required".into()));
    }

    let now = Utc::now();

    let created = sqlx::query_as::<_, TrainingSession>(
        "INSERT INTO training_sessions (team_id, title, session_date, location, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING *",
    )
    .bind(team_id)
    .bind(&session.title)
    .bind(session.session_date)
    .bind(&session.location)
    .bind(&session.description)
    .bind(now)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create training session: {}", e)))?;

    tracing::info!("Created training session {} for team {}", created.id, team_id);

    Ok(created)
}
