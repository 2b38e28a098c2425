//! # Campus Core
//!
//! Core types, errors, and the access decision policy for the Campus API.
//!
//! This crate provides the pieces every other crate builds on:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`roles`]: The closed sets of portal roles and department roles
//! - [`capabilities`]: Role → [`CapabilitySet`] policy table
//! - [`department`]: Department role → [`DepartmentCapabilitySet`] policy table
//! - [`navigation`]: Static portal menu and the role-based menu filter
//! - [`access`]: Lookup traits and the default-deny resolvers built on them
//!
//! # Example
//!
//! ```ignore
//! use campus_core::capabilities::capabilities_for;
//! use campus_core::navigation::{visible_entries, PORTAL_MENU};
//!
//! let caps = capabilities_for(Some("parent"));
//! assert!(caps.view_child_grades);
//!
//! let menu = visible_entries(Some("parent"), PORTAL_MENU);
//! ```

pub mod access;
pub mod capabilities;
pub mod department;
pub mod errors;
pub mod navigation;
pub mod roles;

// Re-export commonly used types at crate root
pub use access::{
    AccessError, DepartmentAccess, LookupError, MembershipLookup, ProfileLookup, UserAccess,
};
pub use capabilities::CapabilitySet;
pub use department::DepartmentCapabilitySet;
pub use errors::AppError;
pub use navigation::MenuEntry;
pub use roles::{DepartmentRole, Role};
