//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use std::fmt;
use thiserror::Error;

/// Shown to the user when the startup acquisition fails.
pub const ACQUISITION_FAILED_MESSAGE: &str = "Failed to generate webhook. Please try again.";

/// Shown to the user when a manual regeneration fails.
pub const REGENERATION_FAILED_MESSAGE: &str = "Failed to regenerate webhook.";

/// Shown to the user when a submission fails. The server response is never shown.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Failed to submit solution. Please check your query and try again.";

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network error, non-2xx status or malformed JSON while generating the webhook.
    #[error("Webhook acquisition failed: {0}")]
    Acquisition(String),

    /// Network error, non-2xx status or malformed JSON while submitting the solution.
    #[error("Solution submission failed: {0}")]
    Submission(String),

    /// Submission precondition not met; no request was sent.
    #[error("Submission disabled: {0}")]
    SubmitDisabled(SubmitBlocker),

    /// A newer acquisition was issued while this one was in flight; its response was dropped.
    #[error("Acquisition attempt {attempt} superseded by attempt {latest}")]
    Superseded { attempt: u64, latest: u64 },

    #[error("UI error: {0}")]
    Ui(String),
}

/// Why the submission gate is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocker {
    NoSession,
    EmptyDraft,
    InFlight,
}

impl fmt::Display for SubmitBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmitBlocker::NoSession => "no access token available",
            SubmitBlocker::EmptyDraft => "query is empty",
            SubmitBlocker::InFlight => "a submission is already in progress",
        };
        f.write_str(s)
    }
}
