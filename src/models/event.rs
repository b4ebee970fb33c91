use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "event_type", rename_all = "kebab-case")]
pub enum EventType {
    Match,
    Training,
    TeamEvent,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Match, EventType::Training, EventType::TeamEvent];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "rsvp_status", rename_all = "kebab-case")]
pub enum RsvpStatus {
    Going,
    Maybe,
    NotGoing,
}

/// Per-event count of members by response. Denormalized onto the
/// events row; the vote rows in event_rsvps remain the record of who
/// chose what.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpTally {
    pub going: i32,
    pub maybe: i32,
    pub not_going: i32,
}

impl RsvpTally {
    pub fn bucket(&self, status: RsvpStatus) -> i32 {
        match status {
            RsvpStatus::Going => self.going,
            RsvpStatus::Maybe => self.maybe,
            RsvpStatus::NotGoing => self.not_going,
        }
    }

    pub fn bucket_mut(&mut self, status: RsvpStatus) -> &mut i32 {
        match status {
            RsvpStatus::Going => &mut self.going,
            RsvpStatus::Maybe => &mut self.maybe,
            RsvpStatus::NotGoing => &mut self.not_going,
        }
    }

    pub fn total_responses(&self) -> i32 {
        self.going + self.maybe + self.not_going
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub team_id: Uuid,
    pub title: String,
    pub event_type: EventType,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub opponent: Option<String>,
    pub description: Option<String>,
    pub rsvp_going: i32,
    pub rsvp_maybe: i32,
    pub rsvp_not_going: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub event_type: EventType,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub opponent: Option<String>,
    pub description: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    pub title: Option<String>,
    pub event_type: Option<EventType>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub opponent: Option<String>,
    pub description: Option<String>,
}

impl Event {
    pub fn rsvp_tally(&self) -> RsvpTally {
        RsvpTally {
            going: self.rsvp_going,
            maybe: self.rsvp_maybe,
            not_going: self.rsvp_not_going,
        }
    }
}
