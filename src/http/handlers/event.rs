use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::event::{
        create_event, delete_event, get_events_by_type, get_month_events, get_team_events,
        get_upcoming_events, get_user_rsvp, set_rsvp, update_event,
    },
    models::event::{Event, EventType, EventUpdate, NewEvent, RsvpStatus},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRangeQuery {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeQuery {
    pub event_type: EventType,
}

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct RsvpPayload {
    pub status: RsvpStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpResponse {
    pub event: Event,
    pub my_rsvp: Option<RsvpStatus>,
}

pub async fn get_team_events_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(range): Query<EventRangeQuery>,
) -> Result<Json<Vec<Event>>, (StatusCode, String)> {
    let events = get_team_events(
        team_id,
        range.start_date,
        range.end_date,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error fetching events for team {}: {}", team_id, e);
        e.to_response()
    })?;

    Ok(Json(events))
}

pub async fn get_upcoming_events_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Event>>, (StatusCode, String)> {
    let events = get_upcoming_events(team_id, query.limit.unwrap_or(5), state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching upcoming events: {}", e);
            e.to_response()
        })?;

    Ok(Json(events))
}

pub async fn get_month_events_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<Event>>, (StatusCode, String)> {
    let events = get_month_events(team_id, query.year, query.month, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching month events: {}", e);
            e.to_response()
        })?;

    Ok(Json(events))
}

pub async fn get_events_by_type_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<TypeQuery>,
) -> Result<Json<Vec<Event>>, (StatusCode, String)> {
    let events = get_events_by_type(team_id, query.event_type, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching events by type: {}", e);
            e.to_response()
        })?;

    Ok(Json(events))
}

pub async fn create_event_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<NewEvent>,
) -> Result<Json<Event>, (StatusCode, String)> {
    let event = create_event(team_id, payload, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error creating event for team {}: {}", team_id, e);
            e.to_response()
        })?;

    tracing::info!("Created event {} for team {}", event.id, team_id);

    Ok(Json(event))
}

pub async fn update_event_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<EventUpdate>,
) -> Result<Json<Event>, (StatusCode, String)> {
    let event = update_event(event_id, payload, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error updating event {}: {}", event_id, e);
            e.to_response()
        })?;

    Ok(Json(event))
}

pub async fn delete_event_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    delete_event(event_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting event {}: {}", event_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Submitting the vote you already hold clears it, so the response
/// carries the vote that is actually on record afterwards.
pub async fn rsvp_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<RsvpPayload>,
) -> Result<Json<RsvpResponse>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let event = set_rsvp(event_id, user_id, payload.status, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error recording RSVP for event {}: {}", event_id, e);
            e.to_response()
        })?;

    let my_rsvp = get_user_rsvp(event_id, user_id, state.postgres.clone())
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(RsvpResponse { event, my_rsvp }))
}
