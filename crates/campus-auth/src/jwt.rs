//! JWT verification and minting.
//!
//! Verification checks the HS256 signature and expiry, and the audience when
//! [`JwtConfig::audience`] is set. Minting exists for the operator CLI and for
//! tests; end-user tokens come from the hosted auth provider.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use campus_config::JwtConfig;
use campus_core::AppError;

use crate::claims::Claims;

/// Creates a signed access token for `user_id`.
///
/// The token expires after [`JwtConfig::access_token_expiry`] seconds and
/// carries the configured audience, if any.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = usize::try_from(jwt_config.access_token_expiry)
        .ok()
        .and_then(|expiry| now.checked_add(expiry))
        .ok_or_else(|| AppError::internal_error("Token expiry is out of range".to_string()))?;

    let claims = Claims {
        sub: user_id.to_string(),
        email: Some(email.to_string()),
        aud: jwt_config.audience.clone(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, the audience does not match, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    match &jwt_config.audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            audience: None,
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_verify_token_success() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let token = create_access_token(user_id, "test@example.edu", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email.as_deref(), Some("test@example.edu"));
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let result = verify_token("invalid-token", &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), "test@example.edu", &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            ..get_test_jwt_config()
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: None,
            aud: None,
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_audience_enforced_when_configured() {
        let issuing = JwtConfig {
            audience: Some("authenticated".to_string()),
            ..get_test_jwt_config()
        };
        let token = create_access_token(Uuid::new_v4(), "a@b.edu", &issuing).unwrap();
        assert!(verify_token(&token, &issuing).is_ok());

        let other = JwtConfig {
            audience: Some("service_role".to_string()),
            ..get_test_jwt_config()
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_oversized_expiry_is_an_error() {
        let config = JwtConfig {
            access_token_expiry: u64::MAX,
            ..get_test_jwt_config()
        };

        let err = create_access_token(Uuid::new_v4(), "a@b.edu", &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 500);
        assert_eq!(err.error.to_string(), "Token expiry is out of range");
    }

    #[test]
    fn test_audience_ignored_when_not_configured() {
        let issuing = JwtConfig {
            audience: Some("authenticated".to_string()),
            ..get_test_jwt_config()
        };
        let token = create_access_token(Uuid::new_v4(), "a@b.edu", &issuing).unwrap();
        assert!(verify_token(&token, &get_test_jwt_config()).is_ok());
    }
}
