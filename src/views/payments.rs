use chrono::NaiveDate;

use crate::models::payment::{NewPayment, Payment, PaymentStats, PaymentStatus, PaymentSummary};

/// One rejected form field, surfaced next to the field rather than
/// aborting the whole request with a bare message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> FieldError {
        FieldError {
            field,
            message: message.to_string(),
        }
    }
}

/// Field checks for the add-payment form. `today` is passed in so the
/// due-date rule does not depend on ambient clock or locale.
pub fn validate_new_payment(draft: &NewPayment, today: NaiveDate) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Payment title is required"));
    }

    if !draft.amount.is_finite() || draft.amount <= 0.0 {
        errors.push(FieldError::new("amount", "Valid amount is required"));
    }

    if draft.due_date < today {
        errors.push(FieldError::new("dueDate", "Due date cannot be in the past"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Any payment not yet paid, input order kept.
pub fn outstanding<'a>(payments: &'a [Payment]) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| p.status != PaymentStatus::Paid)
        .collect()
}

/// Headline numbers: amounts owed and settled, how many items are
/// open, and the soonest open due date.
pub fn summarize(payments: &[Payment]) -> PaymentSummary {
    let open: Vec<&Payment> = outstanding(payments);

    PaymentSummary {
        total_outstanding: open.iter().map(|p| p.amount).sum(),
        total_paid: payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Paid)
            .map(|p| p.amount)
            .sum(),
        pending_count: open.len(),
        next_due_date: open.iter().map(|p| p.due_date).min(),
    }
}

/// Fold (status, amount) pairs into per-status counts and totals.
pub fn fold_stats<I>(rows: I) -> PaymentStats
where
    I: IntoIterator<Item = (PaymentStatus, f64)>,
{
    let mut stats = PaymentStats::default();

    for (status, amount) in rows {
        stats.total += 1;
        stats.total_amount += amount;

        match status {
            PaymentStatus::Paid => {
                stats.paid += 1;
                stats.paid_amount += amount;
            }
            PaymentStatus::Pending => {
                stats.pending += 1;
                stats.pending_amount += amount;
            }
            PaymentStatus::Overdue => {
                stats.overdue += 1;
                stats.overdue_amount += amount;
            }
        }
    }

    stats
}
