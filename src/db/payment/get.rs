use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::payment::{Payment, PaymentStats, PaymentStatus, TeamPayment},
    views,
};

pub async fn get_user_payments(
    user_id: Uuid,
    team_id: Option<Uuid>,
    postgres: PgPool,
) -> Result<Vec<Payment>, AppError> {
    let payments = sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments
        WHERE user_id = $1 AND ($2::uuid IS NULL OR team_id = $2)
        ORDER BY due_date ASC",
    )
    .bind(user_id)
    .bind(team_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user payments: {}", e)))?;

    Ok(payments)
}

/// All of a team's payments with payer display fields, for the
/// treasurer view.
pub async fn get_team_payments(
    team_id: Uuid,
    postgres: PgPool,
) -> Result<Vec<TeamPayment>, AppError> {
    let payments = sqlx::query_as::<_, TeamPayment>(
        "SELECT p.*, up.full_name AS payer_name, up.email AS payer_email
        FROM payments p
        LEFT JOIN user_profiles up ON up.id = p.user_id
        WHERE p.team_id = $1
        ORDER BY p.due_date ASC",
    )
    .bind(team_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team payments: {}", e)))?;

    Ok(payments)
}

pub async fn get_overdue_payments(
    user_id: Uuid,
    team_id: Option<Uuid>,
    postgres: PgPool,
) -> Result<Vec<Payment>, AppError> {
    let payments = sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments
        WHERE user_id = $1 AND status = 'overdue' AND ($2::uuid IS NULL OR team_id = $2)
        ORDER BY due_date ASC",
    )
    .bind(user_id)
    .bind(team_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch overdue payments: {}", e)))?;

    Ok(payments)
}

/// Open payments worth flagging: already past due, or due within the
/// next week.
pub async fn get_payment_alerts(
    user_id: Uuid,
    team_id: Option<Uuid>,
    postgres: PgPool,
) -> Result<Vec<Payment>, AppError> {
    let today = Utc::now().date_naive();
    let week_out = today + Duration::days(7);

    let payments = sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments
        WHERE user_id = $1
          AND status IN ('pending', 'overdue')
          AND (due_date < $2 OR due_date <= $3)
          AND ($4::uuid IS NULL OR team_id = $4)
        ORDER BY due_date ASC",
    )
    .bind(user_id)
    .bind(today)
    .bind(week_out)
    .bind(team_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch payment alerts: {}", e)))?;

    Ok(payments)
}

/// Per-status counts and totals across the team, folded client-side
/// from one (status, amount) projection.
pub async fn get_payment_stats(team_id: Uuid, postgres: PgPool) -> Result<PaymentStats, AppError> {
    let rows = sqlx::query_as::<_, (PaymentStatus, f64)>(
        "SELECT status, amount FROM payments WHERE team_id = $1",
    )
    .bind(team_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch payment stats: {}", e)))?;

    Ok(views::payments::fold_stats(rows))
}
