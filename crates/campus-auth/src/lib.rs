//! # Campus Auth
//!
//! Bearer token handling for the Campus API.
//!
//! End users sign in with the hosted auth provider, which issues HS256 access
//! tokens signed with a secret shared with this service. This crate provides:
//!
//! - [`claims`]: The claim structure carried by those tokens
//! - [`jwt`]: Token verification, plus token minting for operators and tests
//!
//! Tokens carry identity only. Roles are never read from the token: they are
//! looked up from the user's profile on every resolution.
//!
//! # Example
//!
//! ```ignore
//! use campus_auth::{create_access_token, verify_token};
//! use campus_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token(user_id, "user@example.edu", &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
