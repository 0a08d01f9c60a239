//! Core domain layer. No external I/O dependencies.
//!
//! Entities, workflow phases and the problem assignment rule live here.

pub mod assignment;
pub mod entities;
pub mod errors;
pub mod phase;

pub use assignment::{ProblemAssignment, assignment_for};
pub use entities::{Identity, SessionArtifact, SubmissionResult, mask_token};
pub use errors::{
    ACQUISITION_FAILED_MESSAGE, DomainError, REGENERATION_FAILED_MESSAGE,
    SUBMISSION_FAILED_MESSAGE, SubmitBlocker,
};
pub use phase::{SessionPhase, SubmissionPhase};
