//! Analyze request DTOs

use serde::Deserialize;
use validator::Validate;

/// Profile analysis request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[validate(url(message = "Please provide a valid LeetCode profile URL"))]
    pub leetcode_url: String,
}
