pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_match;
pub use get::{
    get_live_match, get_match_events, get_recent_matches, get_team_matches, get_upcoming_matches,
};
pub use patch::update_match;
pub use post::{add_match_event, create_match};
