pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_payment;
pub use get::{
    get_overdue_payments, get_payment_alerts, get_payment_stats, get_team_payments,
    get_user_payments,
};
pub use patch::{mark_payment_paid, update_payment};
pub use post::create_payment;
