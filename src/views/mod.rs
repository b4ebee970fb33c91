pub mod announcements;
pub mod calendar;
pub mod filter;
pub mod payments;
pub mod roster;
pub mod rsvp;
pub mod sort;
pub mod statistics;
