use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post, put},
};

use crate::{
    http::handlers::{announcement, auth, dashboard, event, matches, payment, statistics, team, training},
    middleware::{create_auth_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();

    let auth_routes = Router::new()
        .route("/auth/signup", post(auth::signup_handler))
        .route("/auth/signin", post(auth::signin_handler))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .merge(auth_routes)
        .route("/auth/signout", post(auth::signout_handler))
        .route("/auth/me", get(auth::me_handler))
        .route("/auth/profile", patch(auth::update_profile_handler))
        .route("/dashboard", get(dashboard::dashboard_handler))
        .route("/teams", get(team::get_my_teams_handler))
        .route("/teams/{team_id}", get(team::get_team_handler))
        .route(
            "/teams/{team_id}/members",
            get(team::get_roster_handler).post(team::add_member_handler),
        )
        .route(
            "/members/{member_id}",
            patch(team::update_member_handler).delete(team::remove_member_handler),
        )
        .route(
            "/teams/{team_id}/events",
            get(event::get_team_events_handler).post(event::create_event_handler),
        )
        .route(
            "/teams/{team_id}/events/upcoming",
            get(event::get_upcoming_events_handler),
        )
        .route(
            "/teams/{team_id}/events/month",
            get(event::get_month_events_handler),
        )
        .route(
            "/teams/{team_id}/events/by-type",
            get(event::get_events_by_type_handler),
        )
        .route(
            "/events/{event_id}",
            patch(event::update_event_handler).delete(event::delete_event_handler),
        )
        .route("/events/{event_id}/rsvp", put(event::rsvp_handler))
        .route(
            "/teams/{team_id}/matches",
            get(matches::get_team_matches_handler).post(matches::create_match_handler),
        )
        .route(
            "/teams/{team_id}/matches/upcoming",
            get(matches::get_upcoming_matches_handler),
        )
        .route(
            "/teams/{team_id}/matches/recent",
            get(matches::get_recent_matches_handler),
        )
        .route(
            "/teams/{team_id}/matches/live",
            get(matches::get_live_match_handler),
        )
        .route(
            "/matches/{match_id}",
            patch(matches::update_match_handler).delete(matches::delete_match_handler),
        )
        .route(
            "/matches/{match_id}/events",
            get(matches::get_match_events_handler).post(matches::add_match_event_handler),
        )
        .route(
            "/teams/{team_id}/trainings",
            get(training::get_team_sessions_handler).post(training::create_session_handler),
        )
        .route(
            "/teams/{team_id}/trainings/upcoming",
            get(training::get_upcoming_sessions_handler),
        )
        .route(
            "/trainings/{session_id}",
            get(training::get_session_handler)
                .patch(training::update_session_handler)
                .delete(training::delete_session_handler),
        )
        .route(
            "/trainings/{session_id}/attendance",
            post(training::mark_attendance_handler),
        )
        .route(
            "/teams/{team_id}/players/{player_id}/attendance",
            get(training::get_attendance_stats_handler),
        )
        .route("/payments", get(payment::get_my_payments_handler))
        .route(
            "/payments/overdue",
            get(payment::get_overdue_payments_handler),
        )
        .route("/payments/alerts", get(payment::get_payment_alerts_handler))
        .route(
            "/teams/{team_id}/payments",
            get(payment::get_team_payments_handler).post(payment::create_payment_handler),
        )
        .route(
            "/teams/{team_id}/payments/stats",
            get(payment::get_payment_stats_handler),
        )
        .route(
            "/payments/{payment_id}",
            patch(payment::update_payment_handler).delete(payment::delete_payment_handler),
        )
        .route("/payments/{payment_id}/pay", post(payment::mark_paid_handler))
        .route(
            "/players/{player_id}/statistics",
            get(statistics::get_player_statistics_handler),
        )
        .route(
            "/teams/{team_id}/statistics",
            get(statistics::get_team_statistics_handler)
                .put(statistics::upsert_statistics_handler),
        )
        .route(
            "/teams/{team_id}/statistics/top-scorers",
            get(statistics::get_top_scorers_handler),
        )
        .route(
            "/teams/{team_id}/statistics/top-assisters",
            get(statistics::get_top_assisters_handler),
        )
        .route(
            "/teams/{team_id}/statistics/summary",
            get(statistics::get_season_summary_handler),
        )
        .route(
            "/teams/{team_id}/statistics/goals",
            post(statistics::add_goal_handler),
        )
        .route(
            "/teams/{team_id}/statistics/assists",
            post(statistics::add_assist_handler),
        )
        .route(
            "/teams/{team_id}/announcements",
            get(announcement::get_team_announcements_handler)
                .post(announcement::create_announcement_handler),
        )
        .route(
            "/teams/{team_id}/announcements/active",
            get(announcement::get_active_announcements_handler),
        )
        .route(
            "/teams/{team_id}/announcements/pinned",
            get(announcement::get_pinned_announcements_handler),
        )
        .route(
            "/teams/{team_id}/announcements/by-priority",
            get(announcement::get_announcements_by_priority_handler),
        )
        .route(
            "/announcements/{announcement_id}",
            patch(announcement::update_announcement_handler)
                .delete(announcement::delete_announcement_handler),
        )
        .route(
            "/announcements/{announcement_id}/pin",
            put(announcement::toggle_pin_handler),
        )
        .with_state(state)
}
