//! Shared session state. Written by acquisition, read by submission.
//!
//! Every acquisition attempt gets a sequence number; only the latest issued attempt may
//! publish its outcome, so a slow stale response never overwrites a newer one.
//!
//! A submission holds a lease for the duration of its request. Starting a new attempt
//! waits for outstanding leases, so the artifact is never cleared under a request that
//! is still using its token.

use crate::domain::{DomainError, SessionArtifact, SessionPhase};
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    phase: SessionPhase,
    latest_attempt: u64,
}

/// In-memory holder of the current [`SessionPhase`].
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Inner>,
    submissions: RwLock<()>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current phase.
    pub async fn phase(&self) -> SessionPhase {
        self.inner.read().await.phase.clone()
    }

    /// The held artifact, if the session is `Ready`.
    pub async fn artifact(&self) -> Option<SessionArtifact> {
        self.inner.read().await.phase.artifact().cloned()
    }

    pub async fn latest_attempt(&self) -> u64 {
        self.inner.read().await.latest_attempt
    }

    /// Held by a submission from the gate check until its response is applied.
    pub(crate) async fn submission_lease(&self) -> RwLockReadGuard<'_, ()> {
        self.submissions.read().await
    }

    /// Issue a new attempt number and clear the artifact (`Acquiring`).
    ///
    /// Waits until no submission lease is held.
    pub(crate) async fn begin_attempt(&self) -> u64 {
        let _drained = self.submissions.write().await;
        let mut inner = self.inner.write().await;
        inner.latest_attempt += 1;
        let attempt = inner.latest_attempt;
        inner.phase = SessionPhase::Acquiring { attempt };
        attempt
    }

    /// Publish the outcome of `attempt`. Dropped with `Superseded` unless it is the latest.
    ///
    /// On failure the phase becomes `AcquisitionFailed` with `failure_message` and the
    /// original error is returned.
    pub(crate) async fn complete_attempt(
        &self,
        attempt: u64,
        outcome: Result<SessionArtifact, DomainError>,
        failure_message: &str,
    ) -> Result<SessionArtifact, DomainError> {
        let mut inner = self.inner.write().await;
        if attempt != inner.latest_attempt {
            debug!(
                attempt,
                latest = inner.latest_attempt,
                ok = outcome.is_ok(),
                "discarding stale acquisition response"
            );
            return Err(DomainError::Superseded {
                attempt,
                latest: inner.latest_attempt,
            });
        }
        match outcome {
            Ok(artifact) => {
                inner.phase = SessionPhase::Ready(artifact.clone());
                Ok(artifact)
            }
            Err(e) => {
                inner.phase = SessionPhase::AcquisitionFailed {
                    message: failure_message.to_string(),
                };
                Err(e)
            }
        }
    }
}
