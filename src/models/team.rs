use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub league: Option<String>,
    pub season: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub home_venue: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "player_position", rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "membership_status", rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Expired,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub position: Option<Position>,
    pub jersey_number: Option<i32>,
    pub membership_status: MembershipStatus,
    pub is_active: bool,
    pub joined_date: Option<NaiveDate>,
}

/// Membership row joined with the member's profile, as the roster
/// screens consume it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub position: Option<Position>,
    pub jersey_number: Option<i32>,
    pub membership_status: MembershipStatus,
    pub joined_date: Option<NaiveDate>,
}
