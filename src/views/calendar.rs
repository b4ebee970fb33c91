use chrono::{DateTime, NaiveDate, Utc};

use crate::models::event::Event;
use crate::views::sort::{SortDirection, sorted_by_date};

/// The next `limit` events at or after `now`, soonest first.
pub fn upcoming_events(events: &[Event], now: DateTime<Utc>, limit: usize) -> Vec<Event> {
    let future: Vec<Event> = events
        .iter()
        .filter(|event| event.start_date >= now)
        .cloned()
        .collect();

    let mut sorted = sorted_by_date(&future, |event| Some(event.start_date), SortDirection::Asc);
    sorted.truncate(limit);
    sorted
}

/// Events whose start falls on the given calendar day, input order kept.
pub fn events_on_day<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.start_date.date_naive() == day)
        .collect()
}
