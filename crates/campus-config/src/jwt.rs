use std::env;

use crate::error::ConfigError;

/// Settings for verifying bearer tokens issued by the hosted auth provider.
///
/// The provider signs HS256 tokens with a shared secret. `audience` is only
/// enforced when set.
///
/// # Environment Variables
///
/// - `JWT_SECRET`: Shared signing secret (required, non-empty)
/// - `JWT_AUDIENCE`: Expected `aud` claim (optional)
/// - `JWT_ACCESS_EXPIRY`: Lifetime in seconds of minted tokens (default: 3600)
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub audience: Option<String>,
    /// Lifetime in seconds of tokens minted by `campus-cli issue-token`.
    pub access_token_expiry: u64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = get("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            secret,
            audience: get("JWT_AUDIENCE").filter(|a| !a.is_empty()),
            access_token_expiry: get("JWT_ACCESS_EXPIRY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600), // 1 hour
        })
    }
}
