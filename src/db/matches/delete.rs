use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn delete_match(match_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let rows = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(match_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete match: {}", e)))?;

    if rows.rows_affected() == 0 {
        return Err(AppError::NotFound("Match not found".into()));
    }

    tracing::info!("Deleted match {}", match_id);

    Ok(())
}
