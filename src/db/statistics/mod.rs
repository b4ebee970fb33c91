pub mod get;
pub mod patch;

pub use get::{
    get_player_statistics, get_season_summary, get_team_statistics, get_top_assisters,
    get_top_scorers,
};
pub use patch::{add_assist, add_goal, upsert_player_statistics};
