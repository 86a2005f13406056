//! Utility functions

pub mod validation;

pub use validation::{extract_username, validate_profile_url};
