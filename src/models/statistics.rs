use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub id: Uuid,
    pub player_id: Uuid,
    pub team_id: Uuid,
    pub season: String,
    pub appearances: i32,
    pub goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub updated_at: DateTime<Utc>,
}

/// Statistics row joined with the player's profile, for leaderboards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayerStats {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub stats: PlayerStatistics,
    pub full_name: String,
    pub avatar_url: Option<String>,
}

/// Season-level totals derived from completed matches and the per-player
/// statistics rows. Points are three for a win, one for a draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub matches_played: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: i64,
    pub total_goals: i64,
    pub total_assists: i64,
    pub win_percentage: i64,
}
