//! Database pool configuration.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required by the server)
//! - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
//! - `DATABASE_ACQUIRE_TIMEOUT_SECS`: Seconds to wait for a pooled connection (default: 5)
//!
//! A lookup that cannot get a connection within the acquire timeout fails,
//! and the resolvers turn that failure into default-deny.

use std::env;

use crate::env_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("DATABASE_URL").ok(),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
            acquire_timeout_secs: env_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            ),
        }
    }
}
