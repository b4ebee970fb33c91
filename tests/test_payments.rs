use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use team_manager_be::models::payment::{NewPayment, Payment, PaymentStatus};
use team_manager_be::views::payments::{fold_stats, outstanding, summarize, validate_new_payment};

fn draft(title: &str, amount: f64, due: NaiveDate) -> NewPayment {
    NewPayment {
        title: title.to_string(),
        description: None,
        category: None,
        amount,
        due_date: due,
    }
}

fn test_payment(amount: f64, status: PaymentStatus, due: NaiveDate) -> Payment {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    Payment {
        id: Uuid::new_v4(),
        team_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: "Membership fee".to_string(),
        description: None,
        category: None,
        amount,
        due_date: due,
        status,
        paid_date: None,
        payment_method: None,
        transaction_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

#[test]
fn test_valid_draft_passes() {
    let today = date(10);
    assert!(validate_new_payment(&draft("March fee", 25.0, date(20)), today).is_ok());
    // Due today is still acceptable.
    assert!(validate_new_payment(&draft("March fee", 25.0, today), today).is_ok());
}

#[test]
fn test_blank_title_is_rejected() {
    let errors = validate_new_payment(&draft("   ", 25.0, date(20)), date(10)).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "title"));
}

#[test]
fn test_non_positive_and_non_finite_amounts_are_rejected() {
    let today = date(10);

    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let errors = validate_new_payment(&draft("Fee", bad, date(20)), today).unwrap_err();
        assert!(
            errors.iter().any(|e| e.field == "amount"),
            "amount {} should be rejected",
            bad
        );
    }
}

#[test]
fn test_past_due_date_is_rejected() {
    let errors = validate_new_payment(&draft("Fee", 25.0, date(5)), date(10)).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "dueDate"));
}

#[test]
fn test_every_failing_field_is_reported_at_once() {
    let errors = validate_new_payment(&draft("", -1.0, date(1)), date(10)).unwrap_err();
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_outstanding_excludes_paid() {
    let payments = vec![
        test_payment(10.0, PaymentStatus::Pending, date(12)),
        test_payment(20.0, PaymentStatus::Paid, date(8)),
        test_payment(30.0, PaymentStatus::Overdue, date(2)),
    ];

    let open = outstanding(&payments);

    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|p| p.status != PaymentStatus::Paid));
}

#[test]
fn test_summarize_totals_and_next_due_date() {
    let payments = vec![
        test_payment(10.0, PaymentStatus::Pending, date(12)),
        test_payment(20.0, PaymentStatus::Paid, date(8)),
        test_payment(30.0, PaymentStatus::Overdue, date(2)),
    ];

    let summary = summarize(&payments);

    assert_eq!(summary.total_outstanding, 40.0);
    assert_eq!(summary.total_paid, 20.0);
    assert_eq!(summary.pending_count, 2);
    // Soonest open due date wins, even when it is already past.
    assert_eq!(summary.next_due_date, Some(date(2)));
}

#[test]
fn test_summarize_empty_list() {
    let summary = summarize(&[]);

    assert_eq!(summary.total_outstanding, 0.0);
    assert_eq!(summary.total_paid, 0.0);
    assert_eq!(summary.pending_count, 0);
    assert_eq!(summary.next_due_date, None);
}

#[test]
fn test_fold_stats_buckets_by_status() {
    let stats = fold_stats(vec![
        (PaymentStatus::Paid, 20.0),
        (PaymentStatus::Pending, 10.0),
        (PaymentStatus::Pending, 15.0),
        (PaymentStatus::Overdue, 30.0),
    ]);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.total_amount, 75.0);
    assert_eq!(stats.paid, 1);
    assert_eq!(stats.paid_amount, 20.0);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.pending_amount, 25.0);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.overdue_amount, 30.0);
}
