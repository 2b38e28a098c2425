//! # Campus CLI
//!
//! Operator commands for the Campus access policy: print the capability
//! table for a role, preview the navigation a role would see, mint bearer
//! tokens for local testing, and resolve a real user's capabilities against
//! the database.
//!
//! Rendering lives here so the binary stays a thin argument dispatcher.

pub mod render;
