use axum::{Json, extract::State, http::StatusCode};

use crate::{
    auth::AuthClaims,
    dashboard::{DashboardData, load_dashboard},
    state::AppState,
};

pub async fn dashboard_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<DashboardData>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    let data = load_dashboard(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error loading dashboard for user {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(data))
}
