use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    pub paid_date: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment joined with the payer's profile, for the team-wide view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayment {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub payment: Payment,
    pub payer_name: Option<String>,
    pub payer_email: Option<String>,
}

/// Per-status counts and amounts across a team's payments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total: i64,
    pub paid: i64,
    pub pending: i64,
    pub overdue: i64,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub pending_amount: f64,
    pub overdue_amount: f64,
}

/// Headline numbers for the payment screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub total_outstanding: f64,
    pub total_paid: f64,
    pub pending_count: usize,
    pub next_due_date: Option<NaiveDate>,
}

/// Fields of the add-payment form, validated before insertion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: f64,
    pub due_date: NaiveDate,
}
