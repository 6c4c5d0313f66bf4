//! CSR Console Core Library
//!
//! Domain models and logic for the customer-service routing admin console:
//! the session gate, the generic rule repository and its three rule domains,
//! plus the read-only staff, request history and dashboard data.

pub mod config;
pub mod customer;
pub mod dashboard;
pub mod error;
pub mod group;
pub mod intent;
pub mod navigation;
pub mod request;
pub mod rule;
pub mod session;

pub use error::{ConsoleError, ConsoleResult};
