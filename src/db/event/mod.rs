pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_event;
pub use get::{
    get_events_by_type, get_month_events, get_team_events, get_upcoming_events, get_user_rsvp,
};
pub use patch::{set_rsvp, update_event};
pub use post::create_event;
