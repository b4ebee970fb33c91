use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn delete_event(event_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let rows = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(event_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete event: {}", e)))?;

    if rows.rows_affected() == 0 {
        return Err(AppError::NotFound("Event not found".into()));
    }

    tracing::info!("Deleted event {}", event_id);

    Ok(())
}
