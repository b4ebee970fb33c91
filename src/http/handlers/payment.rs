use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::payment::{
        create_payment, delete_payment, get_overdue_payments, get_payment_alerts,
        get_payment_stats, get_team_payments, get_user_payments, mark_payment_paid, update_payment,
    },
    models::payment::{NewPayment, Payment, PaymentStats, TeamPayment},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentScopeQuery {
    pub team_id: Option<Uuid>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentPayload {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub draft: NewPayment,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPaidPayload {
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
}

pub async fn get_my_payments_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Query(scope): Query<PaymentScopeQuery>,
) -> Result<Json<Vec<Payment>>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let payments = get_user_payments(user_id, scope.team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching payments: {}", e);
            e.to_response()
        })?;

    Ok(Json(payments))
}

pub async fn get_overdue_payments_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Query(scope): Query<PaymentScopeQuery>,
) -> Result<Json<Vec<Payment>>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let payments = get_overdue_payments(user_id, scope.team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching overdue payments: {}", e);
            e.to_response()
        })?;

    Ok(Json(payments))
}

pub async fn get_payment_alerts_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Query(scope): Query<PaymentScopeQuery>,
) -> Result<Json<Vec<Payment>>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let alerts = get_payment_alerts(user_id, scope.team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching payment alerts: {}", e);
            e.to_response()
        })?;

    Ok(Json(alerts))
}

pub async fn get_team_payments_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<TeamPayment>>, (StatusCode, String)> {
    let payments = get_team_payments(team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching payments for team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(payments))
}

pub async fn get_payment_stats_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
) -> Result<Json<PaymentStats>, (StatusCode, String)> {
    let stats = get_payment_stats(team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error computing payment stats for team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(stats))
}

pub async fn create_payment_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<CreatePaymentPayload>,
) -> Result<Json<Payment>, (StatusCode, String)> {
    let payment = create_payment(team_id, payload.user_id, payload.draft, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error creating payment for team {}: {}", team_id, e);
            e.to_response()
        })?;

    tracing::info!("Created payment {} for team {}", payment.id, team_id);

    Ok(Json(payment))
}

pub async fn update_payment_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(payment_id): Path<Uuid>,
    Json(payload): Json<UpdatePaymentPayload>,
) -> Result<Json<Payment>, (StatusCode, String)> {
    let payment = update_payment(
        payment_id,
        payload.title,
        payload.description,
        payload.amount,
        payload.due_date,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating payment {}: {}", payment_id, e);
        e.to_response()
    })?;

    Ok(Json(payment))
}

pub async fn mark_paid_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(payment_id): Path<Uuid>,
    Json(payload): Json<MarkPaidPayload>,
) -> Result<Json<Payment>, (StatusCode, String)> {
    let payment = mark_payment_paid(
        payment_id,
        payload.payment_method,
        payload.transaction_id,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error marking payment {} paid: {}", payment_id, e);
        e.to_response()
    })?;

    tracing::info!("Payment {} marked paid", payment_id);

    Ok(Json(payment))
}

pub async fn delete_payment_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(payment_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    delete_payment(payment_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting payment {}: {}", payment_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}
