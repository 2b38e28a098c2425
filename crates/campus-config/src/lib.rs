//! # Campus Config
//!
//! Configuration types for the Campus API.
//!
//! Every structure is loaded from environment variables with sensible
//! development defaults:
//!
//! - [`jwt`]: Bearer token verification settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: Connection pool sizing for the profile and membership lookups
//! - [`server`]: Listener addresses and observability toggles
//!
//! # Example
//!
//! ```ignore
//! use campus_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env()?;
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
