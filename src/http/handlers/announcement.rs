use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::announcement::{
        create_announcement, delete_announcement, get_active_announcements,
        get_announcements_by_priority, get_pinned_announcements, get_team_announcements,
        toggle_pin, update_announcement,
    },
    models::announcement::{Announcement, Priority},
    state::AppState,
};

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct PriorityQuery {
    pub priority: Priority,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementPayload {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: Priority,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<Priority>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinPayload {
    pub is_pinned: bool,
}

pub async fn get_team_announcements_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Announcement>>, (StatusCode, String)> {
    let announcements = get_team_announcements(team_id, query.limit, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching announcements for team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(announcements))
}

pub async fn get_active_announcements_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Announcement>>, (StatusCode, String)> {
    let announcements = get_active_announcements(team_id, query.limit, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching active announcements: {}", e);
            e.to_response()
        })?;

    Ok(Json(announcements))
}

pub async fn get_pinned_announcements_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<Announcement>>, (StatusCode, String)> {
    let announcements = get_pinned_announcements(team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching pinned announcements: {}", e);
            e.to_response()
        })?;

    Ok(Json(announcements))
}

pub async fn get_announcements_by_priority_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<PriorityQuery>,
) -> Result<Json<Vec<Announcement>>, (StatusCode, String)> {
    let announcements =
        get_announcements_by_priority(team_id, query.priority, state.postgres.clone())
            .await
            .map_err(|e| {
                tracing::error!("Error fetching announcements by priority: {}", e);
                e.to_response()
            })?;

    Ok(Json(announcements))
}

pub async fn create_announcement_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<CreateAnnouncementPayload>,
) -> Result<Json<Announcement>, (StatusCode, String)> {
    let author_id = claims.user_id()?;

    let announcement = create_announcement(
        team_id,
        author_id,
        payload.title,
        payload.content,
        payload.priority,
        payload.expires_at,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating announcement for team {}: {}", team_id, e);
        e.to_response()
    })?;

    Ok(Json(announcement))
}

pub async fn update_announcement_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(announcement_id): Path<Uuid>,
    Json(payload): Json<UpdateAnnouncementPayload>,
) -> Result<Json<Announcement>, (StatusCode, String)> {
    let announcement = update_announcement(
        announcement_id,
        payload.title,
        payload.content,
        payload.priority,
        payload.expires_at,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating announcement {}: {}", announcement_id, e);
        e.to_response()
    })?;

    Ok(Json(announcement))
}

pub async fn toggle_pin_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(announcement_id): Path<Uuid>,
    Json(payload): Json<PinPayload>,
) -> Result<Json<Announcement>, (StatusCode, String)> {
    let announcement = toggle_pin(announcement_id, payload.is_pinned, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error pinning announcement {}: {}", announcement_id, e);
            e.to_response()
        })?;

    Ok(Json(announcement))
}

pub async fn delete_announcement_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(announcement_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    delete_announcement(announcement_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting announcement {}: {}", announcement_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}
