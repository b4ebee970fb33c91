use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use team_manager_be::models::announcement::{Announcement, Priority};
use team_manager_be::views::announcements::{active, pinned_first};

fn announcement(
    title: &str,
    pinned: bool,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
) -> Announcement {
    Announcement {
        id: Uuid::new_v4(),
        team_id: Uuid::new_v4(),
        author_id: Uuid::new_v4(),
        title: title.to_string(),
        content: "...".to_string(),
        priority: Priority::Normal,
        is_pinned: pinned,
        expires_at,
        created_at,
        updated_at: created_at,
        author_name: None,
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

#[test]
fn test_active_drops_expired_announcements() {
    let items = vec![
        announcement("no expiry", false, now() - Duration::days(3), None),
        announcement(
            "expired",
            false,
            now() - Duration::days(3),
            Some(now() - Duration::hours(1)),
        ),
        announcement(
            "still open",
            false,
            now() - Duration::days(3),
            Some(now() + Duration::hours(1)),
        ),
    ];

    let visible = active(&items, now());

    let titles: Vec<&str> = visible.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["no expiry", "still open"]);
}

#[test]
fn test_expiry_boundary_is_exclusive() {
    let item = announcement("on the dot", false, now() - Duration::days(1), Some(now()));

    // An announcement expiring exactly now is no longer active.
    assert!(active(&[item], now()).is_empty());
}

#[test]
fn test_pinned_first_then_newest() {
    let items = vec![
        announcement("old unpinned", false, now() - Duration::days(5), None),
        announcement("new unpinned", false, now() - Duration::days(1), None),
        announcement("old pinned", true, now() - Duration::days(10), None),
        announcement("new pinned", true, now() - Duration::days(2), None),
    ];

    let ordered = pinned_first(items.iter().collect());

    let titles: Vec<&str> = ordered.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["new pinned", "old pinned", "new unpinned", "old unpinned"]
    );
}

#[test]
fn test_ties_keep_input_order() {
    let at = now() - Duration::days(1);
    let items = vec![
        announcement("first", false, at, None),
        announcement("second", false, at, None),
    ];

    let ordered = pinned_first(items.iter().collect());

    assert_eq!(ordered[0].title, "first");
    assert_eq!(ordered[1].title, "second");
}
