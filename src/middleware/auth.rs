use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use campus_auth::{Claims, verify_token};
use campus_core::AppError;
use uuid::Uuid;

use crate::state::AppState;

/// Extractor that validates the bearer token and yields the caller's identity.
///
/// Carries identity only. The caller's role is looked up per request, so a
/// role change takes effect on the next call without reissuing tokens.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub claims: Claims,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format".to_string())
        })?;

        let claims = verify_token(token, &state.jwt_config)?;
        let user_id = claims.user_id()?;

        Ok(Session { user_id, claims })
    }
}
