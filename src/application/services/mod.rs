//! Application services - Use case implementations

pub mod party_service;

pub use party_service::{PartyService, PartyServiceImpl};
