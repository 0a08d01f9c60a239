//! Mock challenge gateway for running the client without the remote service.
//!
//! Returns hardcoded responses for development and demos.

use crate::domain::{DomainError, Identity, SessionArtifact, SubmissionResult};
use crate::ports::ChallengeGateway;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::info;

/// Mock gateway. Simulates network latency with a configurable delay.
pub struct MockChallengeGateway {
    delay_ms: u64,
    issued: AtomicU64,
}

impl MockChallengeGateway {
    /// Create a new mock gateway with default delay (300ms).
    pub fn new() -> Self {
        Self::with_delay(300)
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            issued: AtomicU64::new(0),
        }
    }
}

impl Default for MockChallengeGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChallengeGateway for MockChallengeGateway {
    async fn generate_webhook(&self, identity: &Identity) -> Result<SessionArtifact, DomainError> {
        info!(reg_no = %identity.reg_no, "[MOCK] Simulating webhook generation");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SessionArtifact {
            webhook_url: format!("https://mock.invalid/hiring/testWebhook/JAVA/{}", n),
            access_token: format!("eyJhbGciOiJIUzI1NiJ9.mock-{}.{}", n, identity.reg_no),
            registration_number: identity.reg_no.clone(),
            acquired_at: Utc::now(),
        })
    }

    async fn submit_solution(
        &self,
        final_query: &str,
        _access_token: &str,
    ) -> Result<SubmissionResult, DomainError> {
        info!(
            query_len = final_query.len(),
            "[MOCK] Simulating solution submission"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(SubmissionResult::new(serde_json::json!({
            "success": true,
            "message": "[MOCK] Webhook processed successfully",
        })))
    }
}
