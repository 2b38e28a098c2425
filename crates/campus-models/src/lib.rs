//! # Campus Models
//!
//! Response DTOs for the Campus API.
//!
//! - [`permissions`]: Portal capability responses
//! - [`departments`]: Department capability responses
//! - [`navigation`]: Filtered menu responses
//! - [`common`]: Health and error bodies

pub mod common;
pub mod departments;
pub mod navigation;
pub mod permissions;

pub use common::{ErrorResponse, HealthResponse};
pub use departments::DepartmentPermissionsResponse;
pub use navigation::{MenuItem, NavigationResponse};
pub use permissions::{PermissionsResponse, RoleCapabilitiesResponse};
