//! Route handlers.

pub mod api;
pub mod customer_rules;
pub mod dashboard;
pub mod group_management;
pub mod intent_rules;
pub mod login;
pub mod not_found;
pub mod request_history;
pub mod rules;
