//! # Campus DB
//!
//! Database pool and PostgreSQL adapters for the Campus API.
//!
//! The portal's relational schema is owned by the hosted backend. This crate
//! only reads the two tables the access resolvers need:
//!
//! ```text
//! profiles(id uuid, user_type text null)
//! department_members(department_id uuid, faculty_id uuid, role text, is_active bool)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use campus_config::DatabaseConfig;
//! use campus_db::{PgDirectory, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! let directory = PgDirectory::new(pool);
//! ```

pub mod directory;

use std::time::Duration;

use campus_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use directory::PgDirectory;
// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool.
///
/// # Errors
///
/// Fails if `DATABASE_URL` is not set or the first connection cannot be
/// established.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(url)
        .await
}
