use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::training::{
        AttendanceStats, TrainingAttendance, TrainingSession, TrainingSessionDetail,
    },
};

pub async fn get_team_sessions(
    team_id: Uuid,
    limit: Option<i64>,
    postgres: PgPool,
) -> Result<Vec<TrainingSession>, AppError> {
    let sessions = sqlx::query_as::<_, TrainingSession>(
        "SELECT * FROM training_sessions
        WHERE team_id = $1
        ORDER BY session_date ASC
        LIMIT $2",
    )
    .bind(team_id)
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch training sessions: {}", e)))?;

    Ok(sessions)
}

pub async fn get_upcoming_sessions(
    team_id: Uuid,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<TrainingSession>, AppError> {
    let sessions = sqlx::query_as::<_, TrainingSession>(
        "SELECT * FROM training_sessions
        WHERE team_id = $1 AND session_date >= $2
        ORDER BY session_date ASC
        LIMIT $3",
    )
    .bind(team_id)
    .bind(Utc::now())
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!("Failed to fetch upcoming training sessions: {}", e))
    })?;

    Ok(sessions)
}

/// Session plus its attendance sheet, fetched concurrently. Either
/// query failing fails the whole load.
pub async fn get_session_with_attendance(
    session_id: Uuid,
    postgres: PgPool,
) -> Result<TrainingSessionDetail, AppError> {
    let session_query = async {
        sqlx::query_as::<_, TrainingSession>("SELECT * FROM training_sessions WHERE id = $1")
            .bind(session_id)
            .fetch_optional(&postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to fetch session: {}", e)))?
            .ok_or_else(|| AppError::NotFound("Training session not found".into()))
    };

    let attendance_query = async {
        sqlx::query_as::<_, TrainingAttendance>(
            "SELECT ta.id, ta.training_id, ta.player_id, ta.attended, ta.notes,
                    up.full_name, up.avatar_url
            FROM training_attendance ta
            LEFT JOIN user_profiles up ON up.id = ta.player_id
            WHERE ta.training_id = $1",
        )
        .bind(session_id)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch attendance: {}", e)))
    };

    let (session, attendance) = tokio::try_join!(session_query, attendance_query)?;

    Ok(TrainingSessionDetail {
        session,
        attendance,
    })
}

/// A player's attendance record across the team's sessions.
pub async fn get_player_attendance_stats(
    player_id: Uuid,
    team_id: Uuid,
    postgres: PgPool,
) -> Result<AttendanceStats, AppError> {
    let records = sqlx::query_scalar::<_, bool>(
        "SELECT ta.attended
        FROM training_attendance ta
        INNER JOIN training_sessions ts ON ts.id = ta.training_id
        WHERE ta.player_id = $1 AND ts.team_id = $2",
    )
    .bind(player_id)
    .bind(team_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch attendance stats: {}", e)))?;

    Ok(AttendanceStats::from_records(&records))
}
