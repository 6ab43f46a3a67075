//! Shared utilities and common types for the RentWheels server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures
//! - Validation utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, JwtConfig, ServerConfig};
pub use types::ErrorBody;
pub use utils::validation;
