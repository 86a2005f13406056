//! Profile models

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A LeetCode username taken from a validated profile URL
///
/// Only constructed by [`crate::utils::validation::extract_username`], so the
/// value is always non-empty and limited to `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Composite profile record assembled from the three upstream payloads
///
/// The payloads are passed through untouched; their schema belongs to the
/// upstream API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub source: String,
    pub profile: Value,
    pub contest: Value,
    pub solved: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_username_serializes_as_string() {
        let username = Username::new_unchecked("thehunterjames");
        assert_eq!(serde_json::to_value(&username).unwrap(), json!("thehunterjames"));
        assert_eq!(username.to_string(), "thehunterjames");
    }

    #[test]
    fn test_record_keys() {
        let record = ProfileRecord {
            source: "alfa-leetcode-api".to_string(),
            profile: json!({ "username": "bob" }),
            contest: json!({ "contestRating": 1500.0 }),
            solved: json!({ "solvedProblem": 42 }),
        };

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["source", "profile", "contest", "solved"] {
            assert!(keys.contains(&key), "missing key {key}");
        }
        assert_eq!(value["solved"]["solvedProblem"], 42);
    }
}
