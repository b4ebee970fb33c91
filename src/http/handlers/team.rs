use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::team::{
        add_team_member, get_team, get_team_members, get_user_teams, remove_team_member,
        update_team_member,
    },
    models::team::{MembershipStatus, Position, RosterPlayer, Team, TeamMember},
    state::AppState,
    views::{self, filter::CategoryFilter, sort::SortDirection},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberPayload {
    pub user_id: Uuid,
    pub position: Option<Position>,
    pub jersey_number: Option<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberPayload {
    pub position: Option<Position>,
    pub jersey_number: Option<i32>,
    pub membership_status: Option<MembershipStatus>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub positions: Option<String>,
    #[serde(default)]
    pub statuses: Option<String>,
    pub sort: Option<SortDirection>,
}

pub async fn get_my_teams_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<Vec<Team>>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let teams = get_user_teams(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching teams: {}", e);
            e.to_response()
        })?;

    Ok(Json(teams))
}

pub async fn get_team_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Team>, (StatusCode, String)> {
    let team = get_team(team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching team {}: {}", team_id, e);
            e.to_response()
        })?;

    Ok(Json(team))
}

/// Roster listing with optional search text, comma-separated position
/// and status filters, and name sort direction.
pub async fn get_roster_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<Vec<RosterPlayer>>, (StatusCode, String)> {
    let players = get_team_members(team_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching roster for team {}: {}", team_id, e);
            e.to_response()
        })?;

    let position_filter = parse_filter::<Position>(query.positions.as_deref())
        .map_err(|msg| (StatusCode::BAD_REQUEST, msg))?;
    let status_filter = parse_filter::<MembershipStatus>(query.statuses.as_deref())
        .map_err(|msg| (StatusCode::BAD_REQUEST, msg))?;

    let search = query.search.unwrap_or_default();
    let filtered =
        views::roster::filter_roster(&players, &search, &position_filter, &status_filter);
    let sorted = views::roster::sort_roster(filtered, query.sort.unwrap_or(SortDirection::Asc));

    Ok(Json(sorted.into_iter().cloned().collect()))
}

fn parse_filter<T>(raw: Option<&str>) -> Result<CategoryFilter<T>, String>
where
    T: serde::de::DeserializeOwned,
{
    let Some(raw) = raw else {
        return Ok(CategoryFilter::All);
    };
    if raw.is_empty() {
        return Ok(CategoryFilter::None);
    }

    let selected = raw
        .split(',')
        .map(|part| serde_json::from_value(serde_json::Value::String(part.trim().to_string())))
        .collect::<Result<Vec<T>, _>>()
        .map_err(|_| format!("Unrecognized filter value in '{}'", raw))?;

    Ok(CategoryFilter::Selected(selected))
}

pub async fn add_member_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<AddMemberPayload>,
) -> Result<Json<TeamMember>, (StatusCode, String)> {
    let member = add_team_member(
        team_id,
        payload.user_id,
        payload.position,
        payload.jersey_number,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error adding member to team {}: {}", team_id, e);
        e.to_response()
    })?;

    tracing::info!("Added member {} to team {}", member.id, team_id);

    Ok(Json(member))
}

pub async fn update_member_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(member_id): Path<Uuid>,
    Json(payload): Json<UpdateMemberPayload>,
) -> Result<Json<TeamMember>, (StatusCode, String)> {
    let member = update_team_member(
        member_id,
        payload.position,
        payload.jersey_number,
        payload.membership_status,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating member {}: {}", member_id, e);
        e.to_response()
    })?;

    Ok(Json(member))
}

pub async fn remove_member_handler(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Path(member_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    remove_team_member(member_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error removing member {}: {}", member_id, e);
            e.to_response()
        })?;

    tracing::info!("Removed member {}", member_id);

    Ok(StatusCode::NO_CONTENT)
}
