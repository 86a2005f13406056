//! Analyze response DTOs

use serde::Serialize;

use crate::models::{ProfileRecord, Username};

/// Profile analysis response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub message: String,
    pub username: Username,
    pub profile_url: String,
    pub raw_data: ProfileRecord,
    /// Always `false`; nothing is cached
    pub cached: bool,
}
