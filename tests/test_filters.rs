use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use team_manager_be::models::event::{Event, EventType};
use team_manager_be::views::calendar::{events_on_day, upcoming_events};
use team_manager_be::views::filter::CategoryFilter;
use team_manager_be::views::sort::{SortDirection, sorted_by_date, sorted_by_text};

fn test_event(title: &str, event_type: EventType, start: DateTime<Utc>) -> Event {
    Event {
        id: Uuid::new_v4(),
        team_id: Uuid::new_v4(),
        title: title.to_string(),
        event_type,
        start_date: start,
        end_date: None,
        location: None,
        opponent: None,
        description: None,
        rsvp_going: 0,
        rsvp_maybe: 0,
        rsvp_not_going: 0,
        created_at: start,
        updated_at: start,
    }
}

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

#[test]
fn test_filter_selected_keeps_subset_in_order() {
    let events = vec![
        test_event("derby", EventType::Match, at(1, 18)),
        test_event("drills", EventType::Training, at(2, 18)),
        test_event("bbq", EventType::TeamEvent, at(3, 12)),
        test_event("away game", EventType::Match, at(4, 15)),
    ];

    let filter = CategoryFilter::Selected(vec![EventType::Match]);
    let visible = filter.apply(&events, |e| e.event_type);

    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].title, "derby");
    assert_eq!(visible[1].title, "away game");
}

#[test]
fn test_filter_all_and_none() {
    let events = vec![
        test_event("derby", EventType::Match, at(1, 18)),
        test_event("drills", EventType::Training, at(2, 18)),
    ];

    let all = CategoryFilter::All.apply(&events, |e| e.event_type);
    assert_eq!(all.len(), 2);

    let none = CategoryFilter::<EventType>::None.apply(&events, |e| e.event_type);
    assert!(none.is_empty());
}

#[test]
fn test_toggle_off_all_categories_is_none_not_all() {
    let mut filter = CategoryFilter::All;
    for event_type in EventType::ALL {
        filter = filter.toggle(event_type, &EventType::ALL);
    }

    // Deselecting everything must land on the empty state, never wrap
    // around to showing everything again.
    assert_eq!(filter, CategoryFilter::None);
}

#[test]
fn test_toggle_back_to_full_selection_collapses_to_all() {
    let filter = CategoryFilter::Selected(vec![EventType::Match, EventType::Training]);
    let filter = filter.toggle(EventType::TeamEvent, &EventType::ALL);

    assert_eq!(filter, CategoryFilter::All);
}

#[test]
fn test_toggle_from_all_drops_one_category() {
    let filter = CategoryFilter::All.toggle(EventType::Training, &EventType::ALL);

    assert_eq!(
        filter,
        CategoryFilter::Selected(vec![EventType::Match, EventType::TeamEvent])
    );
}

#[test]
fn test_sorted_by_text_is_case_insensitive_and_stable() {
    let items = vec![
        ("bravo", 1),
        ("Alpha", 2),
        ("alpha", 3),
        ("Charlie", 4),
    ];

    let sorted = sorted_by_text(&items, |i| Some(i.0.to_string()), SortDirection::Asc);

    // The two alphas tie and keep their input order.
    assert_eq!(sorted[0], ("Alpha", 2));
    assert_eq!(sorted[1], ("alpha", 3));
    assert_eq!(sorted[2], ("bravo", 1));
    assert_eq!(sorted[3], ("Charlie", 4));
}

#[test]
fn test_sorted_missing_keys_go_last_in_both_directions() {
    let items = vec![(Some("beta"), 1), (None, 2), (Some("alpha"), 3)];
    let key = |i: &(Option<&str>, i32)| i.0.map(String::from);

    let asc = sorted_by_text(&items, key, SortDirection::Asc);
    assert_eq!(asc.last().unwrap().1, 2);

    let desc = sorted_by_text(&items, key, SortDirection::Desc);
    assert_eq!(desc.last().unwrap().1, 2);
    assert_eq!(desc[0].0, Some("beta"));
}

#[test]
fn test_direction_toggle_restores_original_order_on_unique_keys() {
    let events = vec![
        test_event("c", EventType::Match, at(3, 10)),
        test_event("a", EventType::Match, at(1, 10)),
        test_event("b", EventType::Match, at(2, 10)),
    ];

    let asc = sorted_by_date(&events, |e| Some(e.start_date), SortDirection::Asc);
    let desc = sorted_by_date(&events, |e| Some(e.start_date), SortDirection::Asc.toggle());

    let asc_titles: Vec<&str> = asc.iter().map(|e| e.title.as_str()).collect();
    let mut desc_titles: Vec<&str> = desc.iter().map(|e| e.title.as_str()).collect();
    desc_titles.reverse();

    assert_eq!(asc_titles, vec!["a", "b", "c"]);
    assert_eq!(asc_titles, desc_titles);
}

#[test]
fn test_upcoming_events_skips_past_and_honors_limit() {
    let now = at(10, 12);
    let events = vec![
        test_event("old", EventType::Match, at(5, 18)),
        test_event("third", EventType::Training, at(20, 18)),
        test_event("first", EventType::Match, at(11, 18)),
        test_event("second", EventType::TeamEvent, at(15, 18)),
    ];

    let upcoming = upcoming_events(&events, now, 2);

    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].title, "first");
    assert_eq!(upcoming[1].title, "second");
}

#[test]
fn test_events_on_day_matches_calendar_date() {
    let events = vec![
        test_event("morning", EventType::Training, at(12, 8)),
        test_event("evening", EventType::Match, at(12, 19)),
        test_event("other day", EventType::Match, at(13, 19)),
    ];

    let day = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
    let on_day = events_on_day(&events, day);

    assert_eq!(on_day.len(), 2);
    assert_eq!(on_day[0].title, "morning");
    assert_eq!(on_day[1].title, "evening");
}
