//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize without pulling serde into the domain model.

pub mod party;

pub use party::*;
