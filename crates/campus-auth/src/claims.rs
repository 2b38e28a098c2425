//! JWT claim structure for bearer tokens.

use campus_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims of an access token issued by the hosted auth provider.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `email`: User's email address, when the provider includes it
/// - `aud`: Audience, when the provider includes it
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    #[serde(default)]
    pub email: Option<String>,
    /// Intended audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default)]
    pub iat: usize,
}

impl Claims {
    /// Parses the subject as a user UUID.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize_provider_token() {
        let json = r#"{"sub":"8d0f3f8e-2f6b-4c53-9d7e-0c6a4a1b2c3d","email":"ada@college.edu","aud":"authenticated","role":"authenticated","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email.as_deref(), Some("ada@college.edu"));
        assert_eq!(claims.aud.as_deref(), Some("authenticated"));
        assert!(claims.user_id().is_ok());
    }

    #[test]
    fn test_claims_without_email() {
        let json = r#"{"sub":"user-1","exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email, None);
        assert_eq!(claims.iat, 0);
    }

    #[test]
    fn test_invalid_subject_is_unauthorized() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            email: None,
            aud: None,
            exp: 9999999999,
            iat: 0,
        };
        let err = claims.user_id().unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_serialize_omits_missing_audience() {
        let claims = Claims {
            sub: "user-123".to_string(),
            email: Some("a@b.edu".to_string()),
            aud: None,
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"user-123""#));
        assert!(!serialized.contains("aud"));
    }
}
