use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::matches::{
        add_match_event, create_match, delete_match, get_live_match, get_match_events,
        get_recent_matches, get_team_matches, get_upcoming_matches, update_match,
    },
    models::matches::{Match, MatchEvent, MatchUpdate, NewMatch},
    state::AppState,
};

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEventPayload {
    pub player_id: Option<Uuid>,
    pub event_type: String,
    pub minute: i32,
    pub detail: Option<String>,
}

pub async fn get_team_matches_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Match>>, (StatusCode, String)> {
    let matches = get_team_matches(team_id, query.limit, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching matches for team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(matches))
}

pub async fn get_upcoming_matches_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Match>>, (StatusCode, String)> {
    let matches = get_upcoming_matches(team_id, query.limit.unwrap_or(5), state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching upcoming matches: {}", e);
            e.to_response()
        })?;

    Ok(Json(matches))
}

pub async fn get_recent_matches_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Match>>, (StatusCode, String)> {
    let matches = get_recent_matches(team_id, query.limit.unwrap_or(5), state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching recent matches: {}", e);
            e.to_response()
        })?;

    Ok(Json(matches))
}

pub async fn get_live_match_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Option<Match>>, (StatusCode, String)> {
    let live = get_live_match(team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching live match for team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(live))
}

pub async fn get_match_events_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(match_id): Path<Uuid>,
) -> Result<Json<Vec<MatchEvent>>, (StatusCode, String)> {
    let events = get_match_events(match_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching events for match {}: {}", match_id, e);
            e.to_response()
        })?;

    Ok(Json(events))
}

pub async fn create_match_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<NewMatch>,
) -> Result<Json<Match>, (StatusCode, String)> {
    let created = create_match(team_id, payload, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error creating match for team {}: {}", team_id, e);
            e.to_response()
        })?;

    tracing::info!("Scheduled match {} for team {}", created.id, team_id);

    Ok(Json(created))
}

pub async fn add_match_event_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(match_id): Path<Uuid>,
    Json(payload): Json<MatchEventPayload>,
) -> Result<Json<MatchEvent>, (StatusCode, String)> {
    let event = add_match_event(
        match_id,
        payload.player_id,
        payload.event_type,
        payload.minute,
        payload.detail,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error adding event to match {}: {}", match_id, e);
        e.to_response()
    })?;

    Ok(Json(event))
}

pub async fn update_match_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(match_id): Path<Uuid>,
    Json(payload): Json<MatchUpdate>,
) -> Result<Json<Match>, (StatusCode, String)> {
    let updated = update_match(match_id, payload, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error updating match {}: {}", match_id, e);
            e.to_response()
        })?;

    Ok(Json(updated))
}

pub async fn delete_match_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(match_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    delete_match(match_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting match {}: {}", match_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}
