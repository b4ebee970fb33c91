use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::training::{
        create_session, delete_session, get_player_attendance_stats, get_session_with_attendance,
        get_team_sessions, get_upcoming_sessions, mark_attendance, update_session,
    },
    models::training::{
        AttendanceStats, NewTrainingSession, TrainingAttendance, TrainingSession,
        TrainingSessionDetail, TrainingSessionUpdate,
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePayload {
    pub player_id: Uuid,
    pub attended: bool,
    pub notes: Option<String>,
}

pub async fn get_team_sessions_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<TrainingSession>>, (StatusCode, String)> {
    let sessions = get_team_sessions(team_id, query.limit, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching sessions for team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(sessions))
}

pub async fn get_upcoming_sessions_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<TrainingSession>>, (StatusCode, String)> {
    let sessions = get_upcoming_sessions(team_id, query.limit.unwrap_or(5), state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching upcoming sessions: {}", e);
            e.to_response()
        })?;

    Ok(Json(sessions))
}

pub async fn get_session_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TrainingSessionDetail>, (StatusCode, String)> {
    let detail = get_session_with_attendance(session_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching session {}: {}", session_id, e);
            e.to_response()
        })?;

    Ok(Json(detail))
}

pub async fn get_attendance_stats_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path((team_id, player_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AttendanceStats>, (StatusCode, String)> {
    let stats = get_player_attendance_stats(player_id, team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching attendance stats: {}", e);
            e.to_response()
        })?;

    Ok(Json(stats))
}

pub async fn create_session_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<NewTrainingSession>,
) -> Result<Json<TrainingSession>, (StatusCode, String)> {
    let session = create_session(team_id, payload, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error creating session for team {}: {}", team_id, e);
            e.to_response()
        })?;

    tracing::info!("Scheduled training session {} for team {}", session.id, team_id);

    Ok(Json(session))
}

pub async fn update_session_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<TrainingSessionUpdate>,
) -> Result<Json<TrainingSession>, (StatusCode, String)> {
    let session = update_session(session_id, payload, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error updating session {}: {}", session_id, e);
            e.to_response()
        })?;

    Ok(Json(session))
}

pub async fn mark_attendance_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<AttendancePayload>,
) -> Result<Json<TrainingAttendance>, (StatusCode, String)> {
    let record = mark_attendance(
        session_id,
        payload.player_id,
        payload.attended,
        payload.notes,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error marking attendance for session {}: {}", session_id, e);
        e.to_response()
    })?;

    Ok(Json(record))
}

pub async fn delete_session_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    delete_session(session_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting session {}: {}", session_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}
