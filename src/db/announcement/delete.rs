use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn delete_announcement(announcement_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let rows = sqlx::query("DELETE FROM announcements WHERE id = $1")
        .bind(announcement_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete announcement: {}", e)))?;

    if rows.rows_affected() == 0 {
        return Err(AppError::NotFound("Announcement not found".into()));
    }

    tracing::info!("Deleted announcement {}", announcement_id);

    Ok(())
}
