use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn from_scores(team_score: i32, opponent_score: i32) -> MatchResult {
        if team_score > opponent_score {
            MatchResult::Win
        } else if team_score < opponent_score {
            MatchResult::Loss
        } else {
            MatchResult::Draw
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Uuid,
    pub team_id: Uuid,
    pub opponent: String,
    pub match_date: DateTime<Utc>,
    pub venue: Option<String>,
    pub competition: Option<String>,
    pub status: MatchStatus,
    pub team_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Derived outcome; only meaningful once both scores are recorded.
    pub fn result(&self) -> Option<MatchResult> {
        match (self.team_score, self.opponent_score) {
            (Some(ours), Some(theirs)) => Some(MatchResult::from_scores(ours, theirs)),
            _ => None,
        }
    }
}

/// Fields accepted when scheduling a match.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub opponent: String,
    pub match_date: DateTime<Utc>,
    pub venue: Option<String>,
    pub competition: Option<String>,
}

/// Partial update; absent fields keep their stored value. Recording a
/// final score goes through here with `status = completed`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    pub opponent: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub competition: Option<String>,
    pub status: Option<MatchStatus>,
    pub team_score: Option<i32>,
    pub opponent_score: Option<i32>,
}

/// Timeline entry within a match (goal, card, substitution), joined
/// with the player's display name where a player is attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Option<Uuid>,
    pub event_type: String,
    pub minute: i32,
    pub detail: Option<String>,
    pub player_name: Option<String>,
}
