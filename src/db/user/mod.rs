pub mod get;
pub mod patch;
pub mod post;

pub use get::{get_profile, verify_credentials};
pub use patch::update_profile;
pub use post::create_user;
