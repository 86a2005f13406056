//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::{constants::PROFILE_URL_PATTERN, models::Username};

static PROFILE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PROFILE_URL_PATTERN).expect("profile URL pattern is a valid regex")
});

/// Check whether `url` is a LeetCode profile URL
pub fn validate_profile_url(url: &str) -> bool {
    PROFILE_URL_RE.is_match(url)
}

/// Extract the username from a LeetCode profile URL
///
/// Uses the same anchored pattern as [`validate_profile_url`], so any URL that
/// fails validation yields `None`.
pub fn extract_username(url: &str) -> Option<Username> {
    PROFILE_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .map(Username::new_unchecked)
}
