//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum accepted request body size in bytes (16 KB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

// =============================================================================
// UPSTREAM API
// =============================================================================

/// Default base URL of the profile aggregation API
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://alfa-leetcode-api.onrender.com";

/// Default timeout for each upstream request in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Source tag attached to every composite profile record
pub const PROFILE_SOURCE: &str = "alfa-leetcode-api";

/// User agent sent with outbound requests
pub const UPSTREAM_USER_AGENT: &str = concat!("leetcode-analyzer/", env!("CARGO_PKG_VERSION"));

/// Upstream path suffixes, relative to `<base>/<username>`
pub mod upstream_paths {
    pub const PROFILE: &str = "";
    pub const CONTEST: &str = "/contest";
    pub const SOLVED: &str = "/solved";
}

// =============================================================================
// PROFILE URLS
// =============================================================================

/// Accepted profile URL shape; group 2 captures the username
pub const PROFILE_URL_PATTERN: &str = r"^https?://(www\.)?leetcode\.com/([a-zA-Z0-9_-]+)/?$";

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

/// Client-facing messages
pub mod messages {
    pub const ANALYZE_SUCCESS: &str = "LeetCode Profile Data Retrieved Successfully";
    pub const INVALID_PROFILE_URL: &str =
        "Invalid LeetCode URL format. Expected: https://leetcode.com/username";
    pub const USERNAME_NOT_EXTRACTED: &str = "Could not extract username from URL";
    pub const PROFILE_UNAVAILABLE: &str = "User not found or LeetCode APIs are unavailable";
    pub const INVALID_INPUT: &str = "Invalid input";
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    pub const ROUTE_NOT_FOUND: &str = "Not found";
    pub const INTERNAL_ERROR: &str = "Internal server error. Please try again later.";
}
