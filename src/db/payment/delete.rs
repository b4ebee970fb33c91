use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn delete_payment(payment_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let rows = sqlx::query("DELETE FROM payments WHERE id = $1")
        .bind(payment_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete payment: {}", e)))?;

    if rows.rows_affected() == 0 {
        return Err(AppError::NotFound("Payment not found".into()));
    }

    tracing::info!("Deleted payment {}", payment_id);

    Ok(())
}
