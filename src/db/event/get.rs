use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::event::{Event, EventType, RsvpStatus},
};

/// Team events in start order, optionally bounded to a date window.
pub async fn get_team_events(
    team_id: Uuid,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    postgres: PgPool,
) -> Result<Vec<Event>, AppError> {
    let events = sqlx::query_as::<_, Event>(
        "SELECT * FROM events
        WHERE team_id = $1
          AND ($2::timestamptz IS NULL OR start_date >= $2)
          AND ($3::timestamptz IS NULL OR start_date <= $3)
        ORDER BY start_date ASC",
    )
    .bind(team_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team events: {}", e)))?;

    Ok(events)
}

pub async fn get_upcoming_events(
    team_id: Uuid,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<Event>, AppError> {
    let events = sqlx::query_as::<_, Event>(
        "SELECT * FROM events
        WHERE team_id = $1 AND start_date >= $2
        ORDER BY start_date ASC
        LIMIT $3",
    )
    .bind(team_id)
    .bind(Utc::now())
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch upcoming events: {}", e)))?;

    Ok(events)
}

/// Events within one calendar month.
pub async fn get_month_events(
    team_id: Uuid,
    year: i32,
    month: u32,
    postgres: PgPool,
) -> Result<Vec<Event>, AppError> {
    let start = Utc
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month: {}-{}", year, month)))?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let end = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month: {}-{}", year, month)))?;

    get_team_events(team_id, Some(start), Some(end), postgres).await
}

pub async fn get_events_by_type(
    team_id: Uuid,
    event_type: EventType,
    postgres: PgPool,
) -> Result<Vec<Event>, AppError> {
    let events = sqlx::query_as::<_, Event>(
        "SELECT * FROM events
        WHERE team_id = $1 AND event_type = $2
        ORDER BY start_date ASC",
    )
    .bind(team_id)
    .bind(event_type)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch events by type: {}", e)))?;

    Ok(events)
}

/// The user's recorded vote for one event, if any.
pub async fn get_user_rsvp(
    event_id: Uuid,
    user_id: Uuid,
    postgres: PgPool,
) -> Result<Option<RsvpStatus>, AppError> {
    let status = sqlx::query_scalar::<_, RsvpStatus>(
        "SELECT status FROM event_rsvps WHERE event_id = $1 AND user_id = $2",
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch RSVP: {}", e)))?;

    Ok(status)
}
