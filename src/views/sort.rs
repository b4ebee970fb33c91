use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn order(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

// Both sorts rely on Vec::sort_by being stable: lists routinely carry
// duplicate keys (several training sessions on the same date) and ties
// must keep their original relative order.

/// Copy of `items` ordered by a case-insensitive string key. Items
/// without a key go last regardless of direction.
pub fn sorted_by_text<E: Clone>(
    items: &[E],
    key: impl Fn(&E) -> Option<String>,
    direction: SortDirection,
) -> Vec<E> {
    let mut out = items.to_vec();
    out.sort_by(|a, b| match (key(a), key(b)) {
        (Some(ka), Some(kb)) => direction.order(ka.to_lowercase().cmp(&kb.to_lowercase())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    out
}

/// Copy of `items` ordered by a timestamp key. Items without a key go
/// last regardless of direction.
pub fn sorted_by_date<E: Clone>(
    items: &[E],
    key: impl Fn(&E) -> Option<DateTime<Utc>>,
    direction: SortDirection,
) -> Vec<E> {
    let mut out = items.to_vec();
    out.sort_by(|a, b| match (key(a), key(b)) {
        (Some(ka), Some(kb)) => direction.order(ka.cmp(&kb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    out
}
