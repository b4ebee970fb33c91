use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn delete_session(session_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let rows = sqlx::query("DELETE FROM training_sessions WHERE id = $1")
        .bind(session_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete training session: {}", e)))?;

    if rows.rows_affected() == 0 {
        return Err(AppError::NotFound("Training session not found".into()));
    }

    tracing::info!("Deleted training session {}", session_id);

    Ok(())
}
