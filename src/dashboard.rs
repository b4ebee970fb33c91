use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db,
    errors::AppError,
    models::{
        announcement::Announcement, matches::Match, payment::Payment, team::Team,
        training::TrainingSession,
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub team: Team,
    pub upcoming_matches: Vec<Match>,
    pub training_sessions: Vec<TrainingSession>,
    pub payment_alerts: Vec<Payment>,
    pub announcements: Vec<Announcement>,
    pub live_match: Option<Match>,
}

/// Loads everything the dashboard shows in one shot. The queries run
/// concurrently and the first failure aborts the whole load, so the
/// caller either gets a complete snapshot or an error.
pub async fn load_dashboard(user_id: Uuid, postgres: PgPool) -> Result<DashboardData, AppError> {
    let teams = db::team::get_user_teams(user_id, postgres.clone()).await?;
    let team = teams
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound("You are not a member of any team yet".into()))?;

    let (upcoming_matches, training_sessions, payment_alerts, announcements, live_match) = tokio::try_join!(
        db::matches::get_upcoming_matches(team.id, 3, postgres.clone()),
        db::training::get_upcoming_sessions(team.id, 2, postgres.clone()),
        db::payment::get_payment_alerts(user_id, Some(team.id), postgres.clone()),
        db::announcement::get_active_announcements(team.id, Some(3), postgres.clone()),
        db::matches::get_live_match(team.id, postgres.clone()),
    )?;

    Ok(DashboardData {
        team,
        upcoming_matches,
        training_sessions,
        payment_alerts,
        announcements,
        live_match,
    })
}
