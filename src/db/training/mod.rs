pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_session;
pub use get::{
    get_player_attendance_stats, get_session_with_attendance, get_team_sessions,
    get_upcoming_sessions,
};
pub use patch::{mark_attendance, update_session};
pub use post::create_session;
