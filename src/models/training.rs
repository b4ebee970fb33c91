use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: Uuid,
    pub team_id: Uuid,
    pub title: String,
    pub session_date: DateTime<Utc>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when scheduling a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrainingSession {
    pub title: String,
    pub session_date: DateTime<Utc>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionUpdate {
    pub title: Option<String>,
    pub session_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainingAttendance {
    pub id: Uuid,
    pub training_id: Uuid,
    pub player_id: Uuid,
    pub attended: bool,
    pub notes: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionDetail {
    pub session: TrainingSession,
    pub attendance: Vec<TrainingAttendance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub total: i64,
    pub attended: i64,
    pub missed: i64,
    pub percentage: i64,
}

impl AttendanceStats {
    /// Fold a set of attended flags into totals. Percentage is rounded
    /// to the nearest whole number, zero when no records exist.
    pub fn from_records(records: &[bool]) -> AttendanceStats {
        let total = records.len() as i64;
        let attended = records.iter().filter(|attended| **attended).count() as i64;
        let percentage = if total > 0 {
            ((attended as f64 / total as f64) * 100.0).round() as i64
        } else {
            0
        };

        AttendanceStats {
            total,
            attended,
            missed: total - attended,
            percentage,
        }
    }
}
