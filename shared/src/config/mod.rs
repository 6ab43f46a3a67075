//! Configuration module
//!
//! Configuration is organized into logical areas:
//! - `auth` - JWT signing configuration
//! - `server` - HTTP server binding configuration

pub mod auth;
pub mod server;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// JWT signing configuration
    pub jwt: JwtConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}
