use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::event::{Event, NewEvent},
};

pub async fn create_event(
    team_id: Uuid,
    event: NewEvent,
    postgres: PgPool,
) -> Result<Event, AppError> {
    if event.title.trim().is_empty() {
        return Err(AppError::Validation("Event title is required".into()));
    }

    let now = Utc::now();

    let created = sqlx::query_as::<_, Event>(
        "INSERT INTO events (team_id, title, event_type, start_date, end_date, location, opponent, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        RETURNING *",
    )
    .bind(team_id)
    .bind(&event.title)
    .bind(event.event_type)
    .bind(event.start_date)
    .bind(event.end_date)
    .bind(&event.location)
    .bind(&event.opponent)
    .bind(&event.description)
    .bind(now)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create event: {}", e)))?;

    tracing::info!("Created event {} for team {}", created.id, team_id);

    Ok(created)
}
