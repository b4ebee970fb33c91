use chrono::{DateTime, Utc};

use crate::models::announcement::Announcement;

/// Drop expired announcements, input order kept.
pub fn active<'a>(items: &'a [Announcement], now: DateTime<Utc>) -> Vec<&'a Announcement> {
    items.iter().filter(|a| a.is_active(now)).collect()
}

/// Pinned items first, newest first within each group. Stable, so
/// announcements created at the same instant keep their input order.
pub fn pinned_first(mut items: Vec<&Announcement>) -> Vec<&Announcement> {
    items.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then(b.created_at.cmp(&a.created_at))
    });
    items
}
