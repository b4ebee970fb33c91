pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_announcement;
pub use get::{
    get_active_announcements, get_announcements_by_priority, get_pinned_announcements,
    get_team_announcements,
};
pub use patch::{toggle_pin, update_announcement};
pub use post::create_announcement;
