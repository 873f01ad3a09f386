//! Activities API client
//!
//! This module wraps the three HTTP endpoints the board consumes:
//! listing activities, signing a participant up, and unregistering one.
//! Application-level rejections (non-2xx with a `detail` body) are carried
//! as [`ApiOutcome::Rejected`]; transport and decode failures are errors.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::models::{ActivityMap, ServerDetail, ServerMessage};
use crate::utils::errors::{ApiError, ApiResult, Result};

/// Outcome of a mutating API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    /// 2xx response; `message` is the server-supplied text, if any
    Accepted { message: Option<String> },
    /// Non-2xx response; `detail` is the server-supplied text, if any
    Rejected { detail: Option<String> },
}

/// HTTP client for the activities service
#[derive(Debug, Clone)]
pub struct ActivitiesClient {
    client: Client,
    base_url: String,
}

impl ActivitiesClient {
    /// Create a new ActivitiesClient instance
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("activity-board/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full activity collection
    pub async fn list(&self) -> ApiResult<ActivityMap> {
        let url = format!("{}/activities", self.base_url);
        debug!(url = %url, "Fetching activity list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Transport(format!("HTTP {}: {}", status, body)));
        }

        response
            .json::<ActivityMap>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sign `email` up for `activity`
    pub async fn signup(&self, activity: &str, email: &str) -> ApiResult<ApiOutcome> {
        let url = format!(
            "{}/activities/{}/signup?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        );
        debug!(activity = activity, email = email, "Submitting signup");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        outcome_of(response).await
    }

    /// Unregister `email` from `activity`
    pub async fn unregister(&self, activity: &str, email: &str) -> ApiResult<ApiOutcome> {
        let url = format!(
            "{}/activities/{}/participants?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        );
        debug!(activity = activity, email = email, "Unregistering participant");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        outcome_of(response).await
    }
}

/// Classify a 2xx/non-2xx response into an outcome.
///
/// A 2xx body must be JSON; a decode failure there is the transport/parse
/// failure class, not a success. The rejection branch stays lenient: a
/// missing or non-JSON `detail` yields `None` and the caller's fallback text.
async fn outcome_of(response: reqwest::Response) -> ApiResult<ApiOutcome> {
    if response.status().is_success() {
        let body = response
            .json::<ServerMessage>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiOutcome::Accepted {
            message: body.message,
        })
    } else {
        let status = response.status();
        let detail = response
            .json::<ServerDetail>()
            .await
            .ok()
            .and_then(|body| body.detail);
        warn!(status = %status, detail = ?detail, "Activities API rejected request");
        Ok(ApiOutcome::Rejected { detail })
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_connect() {
        ApiError::ServiceUnavailable
    } else {
        ApiError::Transport(err.to_string())
    }
}
