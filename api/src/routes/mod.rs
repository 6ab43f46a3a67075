//! REST route handlers

pub mod auth;
pub mod rentals;
pub mod users;
