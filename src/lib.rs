//! # Campus
//!
//! HTTP service answering "what may this user do" for the college portal.
//!
//! The portal front-end asks this service for the caller's capability set,
//! their capabilities inside a department, and the navigation menu their role
//! should see. Every answer is derived from the user's stored role through
//! fixed policy tables in [`campus_core`]; lookup failures degrade to
//! default-deny answers rather than errors.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
