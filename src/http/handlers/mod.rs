pub mod announcement;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod matches;
pub mod payment;
pub mod statistics;
pub mod team;
pub mod training;
