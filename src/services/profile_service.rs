//! Profile aggregation service
//!
//! Fetches the basic profile, contest history and solved-problem counts for a
//! username from the upstream API and merges them into one [`ProfileRecord`].
//! All three calls must succeed; any failure yields no record at all.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::UpstreamConfig,
    constants::{upstream_paths, PROFILE_SOURCE, UPSTREAM_USER_AGENT},
    models::{ProfileRecord, Username},
};

/// Source of composite profile records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch the composite record for `username`, or `None` if any part of it
    /// could not be retrieved
    async fn fetch_profile(&self, username: &Username) -> Option<ProfileRecord>;
}

/// Failure of a single upstream request
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned a body that is not JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        let endpoint = endpoint.to_string();
        if err.is_timeout() {
            Self::Timeout { endpoint }
        } else if err.is_decode() {
            Self::Decode {
                endpoint,
                source: err,
            }
        } else {
            Self::Transport {
                endpoint,
                source: err,
            }
        }
    }
}

/// HTTP client for the profile aggregation API
#[derive(Debug, Clone)]
pub struct ProfileService {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl ProfileService {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(UPSTREAM_USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        })
    }

    /// Fetch all three payloads for `username`
    ///
    /// The requests run concurrently, but every outcome is awaited before the
    /// first failure (in profile, contest, solved order) is reported.
    pub async fn fetch_all(&self, username: &Username) -> Result<ProfileRecord, UpstreamError> {
        let (profile, contest, solved) = tokio::join!(
            self.get_json(username, upstream_paths::PROFILE),
            self.get_json(username, upstream_paths::CONTEST),
            self.get_json(username, upstream_paths::SOLVED),
        );

        Ok(ProfileRecord {
            source: PROFILE_SOURCE.to_string(),
            profile: profile?,
            contest: contest?,
            solved: solved?,
        })
    }

    async fn get_json(&self, username: &Username, suffix: &str) -> Result<Value, UpstreamError> {
        let endpoint = format!("{}/{}{}", self.base_url, username, suffix);
        debug!(endpoint = %endpoint, "Fetching upstream profile data");

        let response = self
            .http
            .get(&endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { endpoint, status });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::from_reqwest(&endpoint, e))
    }
}

#[async_trait]
impl ProfileProvider for ProfileService {
    async fn fetch_profile(&self, username: &Username) -> Option<ProfileRecord> {
        match self.fetch_all(username).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(username = %username, error = %e, "Failed to fetch profile");
                None
            }
        }
    }
}
