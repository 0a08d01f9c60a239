//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Identity, SessionArtifact, SubmissionResult};

/// Remote challenge service: webhook generation and solution submission.
#[async_trait::async_trait]
pub trait ChallengeGateway: Send + Sync {
    /// POST `identity` to the generation endpoint and return the webhook/token pair.
    ///
    /// The returned artifact's `registration_number` is `identity.reg_no`, whatever the
    /// response contains. Any non-2xx status, transport error or malformed body maps to
    /// `DomainError::Acquisition`.
    async fn generate_webhook(&self, identity: &Identity) -> Result<SessionArtifact, DomainError>;

    /// POST `{"finalQuery": final_query}` to the submission endpoint with
    /// `Authorization: <access_token>` (sent verbatim, no scheme prefix).
    ///
    /// Any non-2xx status, transport error or malformed body maps to `DomainError::Submission`.
    async fn submit_solution(
        &self,
        final_query: &str,
        access_token: &str,
    ) -> Result<SubmissionResult, DomainError>;
}
