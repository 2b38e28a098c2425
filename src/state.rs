use std::fmt;
use std::sync::Arc;

use campus_config::{CorsConfig, DatabaseConfig, JwtConfig};
use campus_core::{MembershipLookup, ProfileLookup};
use campus_db::{PgDirectory, init_db_pool};

/// Everything the handlers need to resolve a caller's role data.
pub trait Directory: ProfileLookup + MembershipLookup {}

impl<T: ProfileLookup + MembershipLookup> Directory for T {}

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn Directory>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        directory: impl Directory + 'static,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            jwt_config,
            cors_config,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;

    Ok(AppState::new(
        PgDirectory::new(pool),
        JwtConfig::from_env()?,
        CorsConfig::from_env()?,
    ))
}
