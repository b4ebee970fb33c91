pub mod announcement;
pub mod event;
pub mod matches;
pub mod payment;
pub mod statistics;
pub mod team;
pub mod training;
pub mod user;

pub use user::UserProfile;
