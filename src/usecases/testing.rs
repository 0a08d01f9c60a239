//! Scripted in-memory gateway for use case tests.

use crate::domain::{DomainError, Identity, SessionArtifact, SubmissionResult};
use crate::ports::ChallengeGateway;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// One scripted `generate_webhook` response.
pub(crate) struct Step {
    token: Option<String>,
    delay: Duration,
}

impl Step {
    pub(crate) fn ok(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn fail() -> Self {
        Self {
            token: None,
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Pops scripted steps for acquisition (succeeds with `token-N` once the script runs out)
/// and answers submissions with a fixed body or a failure. Records every call.
pub(crate) struct ScriptedGateway {
    steps: Mutex<VecDeque<Step>>,
    submit_body: Option<serde_json::Value>,
    submit_delay: Duration,
    generate_calls: AtomicUsize,
    submissions: Mutex<Vec<(String, String)>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            steps: Mutex::new(VecDeque::new()),
            submit_body: Some(serde_json::json!({"status": "ok"})),
            submit_delay: Duration::ZERO,
            generate_calls: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_steps(self, steps: Vec<Step>) -> Self {
        *self.steps.lock().unwrap() = steps.into();
        self
    }

    pub(crate) fn failing_submissions(mut self) -> Self {
        self.submit_body = None;
        self
    }

    pub(crate) fn slow_submissions(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub(crate) fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    /// `(final_query, access_token)` of every submission received.
    pub(crate) fn submissions(&self) -> Vec<(String, String)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChallengeGateway for ScriptedGateway {
    async fn generate_webhook(&self, identity: &Identity) -> Result<SessionArtifact, DomainError> {
        let n = self.generate_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Step::ok(&format!("token-{}", n)));
        tokio::time::sleep(step.delay).await;
        match step.token {
            Some(token) => Ok(SessionArtifact {
                webhook_url: format!("https://example.test/hook/{}", n),
                access_token: token,
                registration_number: identity.reg_no.clone(),
                acquired_at: Utc::now(),
            }),
            None => Err(DomainError::Acquisition("HTTP 500".to_string())),
        }
    }

    async fn submit_solution(
        &self,
        final_query: &str,
        access_token: &str,
    ) -> Result<SubmissionResult, DomainError> {
        self.submissions
            .lock()
            .unwrap()
            .push((final_query.to_string(), access_token.to_string()));
        tokio::time::sleep(self.submit_delay).await;
        match &self.submit_body {
            Some(body) => Ok(SubmissionResult::new(body.clone())),
            None => Err(DomainError::Submission("HTTP 401: invalid token".to_string())),
        }
    }
}
