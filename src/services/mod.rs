//! Business logic services

pub mod profile_service;

pub use profile_service::{ProfileProvider, ProfileService, UpstreamError};
