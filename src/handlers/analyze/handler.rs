//! Analyze handler implementations

use axum::{extract::State, Json};
use tracing::info;

use crate::{
    constants::messages,
    error::{AppError, AppResult},
    handlers::extract::ValidatedJson,
    state::AppState,
    utils::validation::{extract_username, validate_profile_url},
};

use super::{request::AnalyzeRequest, response::AnalyzeResponse};

/// Retrieve the composite statistics for a LeetCode profile URL
pub async fn analyze_profile(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    let profile_url = payload.leetcode_url;

    if !validate_profile_url(&profile_url) {
        return Err(AppError::BadRequest(messages::INVALID_PROFILE_URL.to_string()));
    }

    let username = extract_username(&profile_url)
        .ok_or_else(|| AppError::BadRequest(messages::USERNAME_NOT_EXTRACTED.to_string()))?;

    let raw_data = state
        .profiles()
        .fetch_profile(&username)
        .await
        .ok_or_else(|| AppError::NotFound(messages::PROFILE_UNAVAILABLE.to_string()))?;

    info!(username = %username, "Profile data retrieved");

    Ok(Json(AnalyzeResponse {
        message: messages::ANALYZE_SUCCESS.to_string(),
        username,
        profile_url,
        raw_data,
        cached: false,
    }))
}

/// Any method other than POST on the analyze route
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
