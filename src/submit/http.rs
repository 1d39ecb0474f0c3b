//! HTTP backend for the Google Apps Script form endpoint
//!
//! Plain unauthenticated POST with the record as JSON. The endpoint sits
//! behind redirects and does not always hand back a readable body, which is
//! why a failed body read is reported as `Ok(None)` rather than an error.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::backend::SubmitBackend;
use crate::config::SubmitConfig;
use crate::response::Submission;
use crate::{Result, RsvpError};

pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpBackend {
    pub fn new(config: &SubmitConfig) -> Result<Self> {
        let endpoint = reqwest::Url::parse(&config.endpoint).map_err(|e| {
            RsvpError::Config(format!("Invalid endpoint '{}': {}", config.endpoint, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitBackend for HttpBackend {
    async fn send(&self, submission: &Submission) -> Result<Option<String>> {
        debug!(endpoint = %self.endpoint, ?submission, "posting RSVP");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body still decides the outcome
            warn!(%status, "form endpoint answered with a non-success status");
        }

        match response.text().await {
            Ok(body) => {
                debug!(%status, body_len = body.len(), "form endpoint replied");
                Ok(Some(body))
            }
            Err(e) => {
                warn!(error = %e, "form endpoint reply could not be read");
                Ok(None)
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
