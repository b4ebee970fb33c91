use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::statistics::{
        add_assist, add_goal, get_player_statistics, get_season_summary, get_team_statistics,
        get_top_assisters, get_top_scorers, upsert_player_statistics,
    },
    models::statistics::{PlayerStatistics, RankedPlayerStats, SeasonSummary},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsQuery {
    pub team_id: Option<Uuid>,
    pub season: Option<String>,
}

#[derive(Deserialize)]
pub struct SeasonQuery {
    pub season: String,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertStatsPayload {
    pub player_id: Uuid,
    pub season: String,
    pub appearances: i32,
    pub goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterPayload {
    pub player_id: Uuid,
    pub season: String,
}

pub async fn get_player_statistics_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(player_id): Path<Uuid>,
    Query(query): Query<PlayerStatsQuery>,
) -> Result<Json<Vec<PlayerStatistics>>, (StatusCode, String)> {
    let stats = get_player_statistics(
        player_id,
        query.team_id,
        query.season,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error fetching statistics for player {}: {}", player_id, e);
        e.to_response()
    })?;

    Ok(Json(stats))
}

pub async fn get_team_statistics_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<Vec<RankedPlayerStats>>, (StatusCode, String)> {
    let stats = get_team_statistics(team_id, &query.season, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching statistics for team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(stats))
}

pub async fn get_top_scorers_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<Vec<RankedPlayerStats>>, (StatusCode, String)> {
    let scorers = get_top_scorers(
        team_id,
        &query.season,
        query.limit.unwrap_or(5),
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error fetching top scorers: {}", e);
        e.to_response()
    })?;

    Ok(Json(scorers))
}

pub async fn get_top_assisters_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<Vec<RankedPlayerStats>>, (StatusCode, String)> {
    let assisters = get_top_assisters(
        team_id,
        &query.season,
        query.limit.unwrap_or(5),
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error fetching top assisters: {}", e);
        e.to_response()
    })?;

    Ok(Json(assisters))
}

pub async fn get_season_summary_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<SeasonSummary>, (StatusCode, String)> {
    let summary = get_season_summary(team_id, &query.season, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error computing season summary for team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(summary))
}

pub async fn upsert_statistics_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<UpsertStatsPayload>,
) -> Result<Json<PlayerStatistics>, (StatusCode, String)> {
    let stats = upsert_player_statistics(
        payload.player_id,
        team_id,
        &payload.season,
        payload.appearances,
        payload.goals,
        payload.assists,
        payload.yellow_cards,
        payload.red_cards,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error upserting statistics: {}", e);
        e.to_response()
    })?;

    Ok(Json(stats))
}

pub async fn add_goal_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<CounterPayload>,
) -> Result<Json<PlayerStatistics>, (StatusCode, String)> {
    let stats = add_goal(
        payload.player_id,
        team_id,
        &payload.season,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error recording goal: {}", e);
        e.to_response()
    })?;

    Ok(Json(stats))
}

pub async fn add_assist_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<CounterPayload>,
) -> Result<Json<PlayerStatistics>, (StatusCode, String)> {
    let stats = add_assist(
        payload.player_id,
        team_id,
        &payload.season,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error recording assist: {}", e);
        e.to_response()
    })?;

    Ok(Json(stats))
}
