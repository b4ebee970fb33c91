use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::event::{Event, EventUpdate, RsvpStatus},
    views,
};

pub async fn update_event(
    event_id: Uuid,
    updates: EventUpdate,
    postgres: PgPool,
) -> Result<Event, AppError> {
    let event = sqlx::query_as::<_, Event>(
        "UPDATE events
        SET title = COALESCE($2, title),
            event_type = COALESCE($3, event_type),
            start_date = COALESCE($4, start_date),
            end_date = COALESCE($5, end_date),
            location = COALESCE($6, location),
            opponent = COALESCE($7, opponent),
            description = COALESCE($8, description),
            updated_at = $9
        WHERE id = $1
        RETURNING *",
    )
    .bind(event_id)
    .bind(&updates.title)
    .bind(updates.event_type)
    .bind(updates.start_date)
    .bind(updates.end_date)
    .bind(&updates.location)
    .bind(&updates.opponent)
    .bind(&updates.description)
    .bind(Utc::now())
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update event: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    Ok(event)
}

/// Record one RSVP click. The vote row and the denormalized tally on
/// the event move together in a single transaction; the toggle
/// semantics live in `views::rsvp`.
pub async fn set_rsvp(
    event_id: Uuid,
    user_id: Uuid,
    chosen: RsvpStatus,
    postgres: PgPool,
) -> Result<Event, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1 FOR UPDATE")
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch event: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let previous = sqlx::query_scalar::<_, RsvpStatus>(
        "SELECT status FROM event_rsvps WHERE event_id = $1 AND user_id = $2",
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch previous RSVP: {}", e)))?;

    let mut tally = event.rsvp_tally();
    let recorded = views::rsvp::apply_rsvp(&mut tally, previous, chosen);

    match recorded {
        Some(status) => {
            sqlx::query(
                "INSERT INTO event_rsvps (event_id, user_id, status, updated_at)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (event_id, user_id) DO UPDATE SET status = $3, updated_at = $4",
            )
            .bind(event_id)
            .bind(user_id)
            .bind(status)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to record RSVP: {}", e)))?;
        }
        None => {
            sqlx::query("DELETE FROM event_rsvps WHERE event_id = $1 AND user_id = $2")
                .bind(event_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Failed to clear RSVP: {}", e)))?;
        }
    }

    let updated = sqlx::query_as::<_, Event>(
        "UPDATE events
        SET rsvp_going = $2, rsvp_maybe = $3, rsvp_not_going = $4, updated_at = $5
        WHERE id = $1
        RETURNING *",
    )
    .bind(event_id)
    .bind(tally.going)
    .bind(tally.maybe)
    .bind(tally.not_going)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update RSVP tally: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit RSVP: {}", e)))?;

    Ok(updated)
}
