//! Request and response shapes for the REST surface.
//!
//! Inbound bodies use explicit structures with optional fields so that an
//! absent field reaches the domain layer as "missing" rather than failing
//! deserialization, preserving the aggregate-all-violations behavior.

pub mod auth;
pub mod rental;
pub mod user;

pub use auth::{AuthPayload, LoginRequest};
pub use rental::CreateRentalRequest;
pub use user::RegisterRequest;
