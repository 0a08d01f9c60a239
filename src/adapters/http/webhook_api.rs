//! reqwest adapter for the hiring challenge API.
//!
//! Two fixed endpoints: webhook generation and solution submission. Every non-2xx status
//! collapses into one generic error per call; no status-specific handling.

use crate::domain::{DomainError, Identity, SessionArtifact, SubmissionResult};
use crate::ports::ChallengeGateway;
use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// HTTP gateway. Uses reqwest's default timeouts.
pub struct HttpChallengeGateway {
    client: reqwest::Client,
    generate_url: String,
    submit_url: String,
}

impl HttpChallengeGateway {
    /// # Arguments
    /// * `generate_url` - webhook generation endpoint
    /// * `submit_url` - solution submission endpoint
    pub fn new(generate_url: String, submit_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            generate_url,
            submit_url,
        }
    }
}

#[derive(Deserialize)]
struct GenerateWebhookResponse {
    #[serde(alias = "webhookUrl")]
    webhook: String,
    #[serde(rename = "accessToken")]
    access_token: String,
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    #[serde(rename = "finalQuery")]
    final_query: &'a str,
}

fn truncate_body(text: &str) -> String {
    text.chars().take(200).collect()
}

#[async_trait::async_trait]
impl ChallengeGateway for HttpChallengeGateway {
    async fn generate_webhook(&self, identity: &Identity) -> Result<SessionArtifact, DomainError> {
        info!(url = %self.generate_url, reg_no = %identity.reg_no, "POST generate webhook");

        let response = self
            .client
            .post(&self.generate_url)
            .header(CONTENT_TYPE, "application/json")
            .json(identity)
            .send()
            .await
            .map_err(|e| DomainError::Acquisition(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %truncate_body(&text), "generate webhook returned error");
            return Err(DomainError::Acquisition(format!(
                "HTTP error! Status: {}",
                status.as_u16()
            )));
        }

        let body: GenerateWebhookResponse = response.json().await.map_err(|e| {
            DomainError::Acquisition(format!("Failed to parse API response: {}", e))
        })?;
        debug!(webhook = %body.webhook, "webhook response parsed");

        Ok(SessionArtifact {
            webhook_url: body.webhook,
            access_token: body.access_token,
            registration_number: identity.reg_no.clone(),
            acquired_at: Utc::now(),
        })
    }

    async fn submit_solution(
        &self,
        final_query: &str,
        access_token: &str,
    ) -> Result<SubmissionResult, DomainError> {
        info!(url = %self.submit_url, query_len = final_query.len(), "POST submit solution");

        let response = self
            .client
            .post(&self.submit_url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, access_token)
            .json(&SubmitRequest { final_query })
            .send()
            .await
            .map_err(|e| DomainError::Submission(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %truncate_body(&text), "submit solution returned error");
            return Err(DomainError::Submission(format!(
                "HTTP error! Status: {}",
                status.as_u16()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DomainError::Submission(format!("Failed to parse API response: {}", e)))?;

        Ok(SubmissionResult::new(body))
    }
}
