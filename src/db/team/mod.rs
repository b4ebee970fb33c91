pub mod get;
pub mod patch;
pub mod post;

pub use get::{get_team, get_team_members, get_user_teams};
pub use patch::{remove_team_member, update_team_member};
pub use post::add_team_member;
