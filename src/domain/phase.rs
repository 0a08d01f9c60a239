//! Workflow phases as tagged state instead of independent loading/submitting flags.

use super::entities::{SessionArtifact, SubmissionResult};

/// `Idle -> Acquiring -> Ready | AcquisitionFailed`. A retry re-enters `Acquiring` from any phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    /// Artifact cleared; `attempt` is the sequence number of the request whose response will be applied.
    Acquiring { attempt: u64 },
    Ready(SessionArtifact),
    AcquisitionFailed { message: String },
}

impl SessionPhase {
    pub fn artifact(&self) -> Option<&SessionArtifact> {
        match self {
            SessionPhase::Ready(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_acquiring(&self) -> bool {
        matches!(self, SessionPhase::Acquiring { .. })
    }
}

/// `Editing -> Submitting -> Submitted | SubmissionFailed`, then back to `Submitting` on the next attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Submitted(SubmissionResult),
    SubmissionFailed { message: String },
}
