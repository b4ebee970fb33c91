use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::payment::Payment};

pub async fn update_payment(
    payment_id: Uuid,
    title: Option<String>,
    description: Option<String>,
    amount: Option<f64>,
    due_date: Option<NaiveDate>,
    postgres: PgPool,
) -> Result<Payment, AppError> {
    let payment = sqlx::query_as::<_, Payment>(
        "UPDATE payments
        SET title = COALESCE($2, title),
            description = COALESCE($3, description),
            amount = COALESCE($4, amount),
            due_date = COALESCE($5, due_date),
            updated_at = $6
        WHERE id = $1
        RETURNING *",
    )
    .bind(payment_id)
    .bind(&title)
    .bind(&description)
    .bind(amount)
    .bind(due_date)
    .bind(Utc::now())
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update payment: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Payment not found".into()))?;

    Ok(payment)
}

/// Settle a payment: status and paid_date move together in one UPDATE
/// so a paid row always carries its paid timestamp.
pub async fn mark_payment_paid(
    payment_id: Uuid,
    payment_method: Option<String>,
    transaction_id: Option<String>,
    postgres: PgPool,
) -> Result<Payment, AppError> {
    let now = Utc::now();

    let payment = sqlx::query_as::<_, Payment>(
        "UPDATE payments
        SET status = 'paid',
            paid_date = $2,
            payment_method = $3,
            transaction_id = $4,
            updated_at = $2
        WHERE id = $1
        RETURNING *",
    )
    .bind(payment_id)
    .bind(now)
    .bind(&payment_method)
    .bind(&transaction_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to mark payment paid: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Payment not found".into()))?;

    tracing::info!("Payment {} marked paid", payment_id);

    Ok(payment)
}
