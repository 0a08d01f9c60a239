//! Application use cases. Orchestrate domain logic via ports.

pub mod acquisition_service;
pub mod session_store;
pub mod submission_service;

#[cfg(test)]
pub(crate) mod testing;

pub use acquisition_service::AcquisitionService;
pub use session_store::SessionStore;
pub use submission_service::SubmissionService;
