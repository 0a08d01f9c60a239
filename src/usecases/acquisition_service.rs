//! Acquisition use case: obtain a webhook/token pair for the configured identity.
//!
//! Runs once at startup and again on every user retry. Overlapping retries are allowed;
//! the most recently issued attempt is the one that lands in the session.

use crate::domain::{
    ACQUISITION_FAILED_MESSAGE, DomainError, Identity, REGENERATION_FAILED_MESSAGE,
    SessionArtifact,
};
use crate::ports::ChallengeGateway;
use crate::usecases::session_store::SessionStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct AcquisitionService {
    gateway: Arc<dyn ChallengeGateway>,
    identity: Identity,
    session: Arc<SessionStore>,
}

impl AcquisitionService {
    pub fn new(
        gateway: Arc<dyn ChallengeGateway>,
        identity: Identity,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            gateway,
            identity,
            session,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Startup acquisition.
    pub async fn acquire(&self) -> Result<SessionArtifact, DomainError> {
        self.run_attempt(ACQUISITION_FAILED_MESSAGE).await
    }

    /// User-initiated retry. Discards the current artifact before the request is sent.
    pub async fn regenerate(&self) -> Result<SessionArtifact, DomainError> {
        self.run_attempt(REGENERATION_FAILED_MESSAGE).await
    }

    async fn run_attempt(&self, failure_message: &str) -> Result<SessionArtifact, DomainError> {
        let attempt = self.session.begin_attempt().await;
        info!(attempt, reg_no = %self.identity.reg_no, "requesting webhook");

        let outcome = self.gateway.generate_webhook(&self.identity).await;
        if let Err(e) = &outcome {
            warn!(attempt, error = %e, "webhook generation failed");
        }

        let artifact = self
            .session
            .complete_attempt(attempt, outcome, failure_message)
            .await?;
        info!(attempt, webhook = %artifact.webhook_url, "webhook generated");
        Ok(artifact)
    }
}
