use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::payment::{NewPayment, Payment},
    views,
};

/// Insert a new payment request. The form-level field checks run here
/// before the insert; a fresh payment always starts out pending.
pub async fn create_payment(
    team_id: Uuid,
    user_id: Uuid,
    draft: NewPayment,
    postgres: PgPool,
) -> Result<Payment, AppError> {
    let today = Utc::now().date_naive();
    views::payments::validate_new_payment(&draft, today).map_err(|errors| {
        let messages: Vec<String> = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        AppError::Validation(messages.join("; "))
    })?;

    let now = Utc::now();

    let payment = sqlx::query_as::<_, Payment>(
        "INSERT INTO payments (team_id, user_id, title, description, category, amount, due_date, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', $8, $8)
        RETURNING *",
    )
    .bind(team_id)
    .bind(user_id)
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(&draft.category)
    .bind(draft.amount)
    .bind(draft.due_date)
    .bind(now)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create payment: {}", e)))?;

    tracing::info!(
        "Created payment {} ({}) for user {}",
        payment.id,
        payment.title,
        user_id
    );

    Ok(payment)
}
