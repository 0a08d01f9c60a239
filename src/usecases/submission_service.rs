//! Submission use case: gate and send the user's query with the session token.
//!
//! The gate is closed while no session artifact is held, while the draft is blank, and
//! while a submission is already in flight. A closed gate never reaches the network.

use crate::domain::{
    DomainError, SUBMISSION_FAILED_MESSAGE, SessionArtifact, SubmissionPhase, SubmissionResult,
    SubmitBlocker,
};
use crate::ports::ChallengeGateway;
use crate::usecases::session_store::SessionStore;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

#[derive(Debug)]
struct DraftState {
    draft: String,
    phase: SubmissionPhase,
}

/// Puts the phase back to `Editing` if `submit` is dropped while the request is in flight.
struct InFlight<'a> {
    state: &'a Mutex<DraftState>,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if matches!(state.phase, SubmissionPhase::Submitting) {
            warn!("submission cancelled before completion");
            state.phase = SubmissionPhase::Editing;
        }
    }
}

pub struct SubmissionService {
    gateway: Arc<dyn ChallengeGateway>,
    session: Arc<SessionStore>,
    default_query: String,
    state: Mutex<DraftState>,
}

impl SubmissionService {
    /// `default_query` is the initial draft and the value restored by [`Self::reset_draft`].
    pub fn new(
        gateway: Arc<dyn ChallengeGateway>,
        session: Arc<SessionStore>,
        default_query: String,
    ) -> Self {
        Self {
            gateway,
            session,
            state: Mutex::new(DraftState {
                draft: default_query.clone(),
                phase: SubmissionPhase::Editing,
            }),
            default_query,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, DraftState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn draft(&self) -> String {
        self.lock_state().draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.lock_state().draft = text.into();
    }

    /// Restore the default query, discarding edits. No network call.
    pub fn reset_draft(&self) {
        self.lock_state().draft = self.default_query.clone();
    }

    pub fn default_query(&self) -> &str {
        &self.default_query
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.lock_state().phase.clone()
    }

    /// `Ok(())` when submit may be offered; otherwise the first reason it is disabled.
    pub async fn can_submit(&self) -> Result<(), SubmitBlocker> {
        let artifact = self.session.artifact().await;
        check_gate(&self.lock_state(), artifact.as_ref()).map(|_| ())
    }

    /// Send the current draft. Refuses with `SubmitDisabled` (no request) when the gate is closed.
    ///
    /// Holds a session lease for the whole request, so a concurrent regeneration waits and
    /// the session stays `Ready` while the phase is `Submitting`. The previous result is
    /// discarded as soon as the request starts. On failure the phase carries
    /// [`SUBMISSION_FAILED_MESSAGE`], never the server's response.
    pub async fn submit(&self) -> Result<SubmissionResult, DomainError> {
        let _lease = self.session.submission_lease().await;
        let artifact = self.session.artifact().await;

        let (query, token) = {
            let mut state = self.lock_state();
            let token =
                check_gate(&state, artifact.as_ref()).map_err(DomainError::SubmitDisabled)?;
            state.phase = SubmissionPhase::Submitting;
            (state.draft.clone(), token)
        };
        let mut in_flight = InFlight {
            state: &self.state,
            armed: true,
        };

        info!(query_len = query.len(), "submitting solution");
        let outcome = self.gateway.submit_solution(&query, &token).await;
        in_flight.armed = false;

        let mut state = self.lock_state();
        match outcome {
            Ok(result) => {
                info!("solution submitted");
                state.phase = SubmissionPhase::Submitted(result.clone());
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "solution submission failed");
                state.phase = SubmissionPhase::SubmissionFailed {
                    message: SUBMISSION_FAILED_MESSAGE.to_string(),
                };
                Err(e)
            }
        }
    }
}

/// Returns the access token to use when the gate is open.
fn check_gate(
    state: &DraftState,
    artifact: Option<&SessionArtifact>,
) -> Result<String, SubmitBlocker> {
    if matches!(state.phase, SubmissionPhase::Submitting) {
        return Err(SubmitBlocker::InFlight);
    }
    let artifact = artifact.ok_or(SubmitBlocker::NoSession)?;
    if state.draft.trim().is_empty() {
        return Err(SubmitBlocker::EmptyDraft);
    }
    Ok(artifact.access_token.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Identity, SessionPhase};
    use std::time::Duration;
    use crate::usecases::AcquisitionService;
    use crate::usecases::testing::{ScriptedGateway, Step};

    const DEFAULT_QUERY: &str = "SELECT 1;";

    struct Fixture {
        gateway: Arc<ScriptedGateway>,
        session: Arc<SessionStore>,
        acquisition: AcquisitionService,
        submission: SubmissionService,
    }

    fn fixture(gateway: ScriptedGateway) -> Fixture {
        let gateway = Arc::new(gateway);
        let session = Arc::new(SessionStore::new());
        let acquisition = AcquisitionService::new(
            Arc::clone(&gateway) as Arc<dyn ChallengeGateway>,
            Identity::new("John Doe", "REG12347", "john@example.com"),
            Arc::clone(&session),
        );
        let submission = SubmissionService::new(
            Arc::clone(&gateway) as Arc<dyn ChallengeGateway>,
            Arc::clone(&session),
            DEFAULT_QUERY.to_string(),
        );
        Fixture {
            gateway,
            session,
            acquisition,
            submission,
        }
    }

    #[tokio::test]
    async fn refuses_without_session() {
        let f = fixture(ScriptedGateway::new());
        f.submission.set_draft("SELECT * FROM employees;");

        assert_eq!(f.submission.can_submit().await, Err(SubmitBlocker::NoSession));
        let err = f.submission.submit().await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::SubmitDisabled(SubmitBlocker::NoSession)
        ));
        assert!(f.gateway.submissions().is_empty());
        assert_eq!(f.submission.phase(), SubmissionPhase::Editing);
    }

    #[tokio::test]
    async fn refuses_blank_draft() {
        let f = fixture(ScriptedGateway::new());
        f.acquisition.acquire().await.unwrap();

        for blank in ["", "   ", "\n\t  \n"] {
            f.submission.set_draft(blank);
            assert_eq!(
                f.submission.can_submit().await,
                Err(SubmitBlocker::EmptyDraft)
            );
            assert!(matches!(
                f.submission.submit().await,
                Err(DomainError::SubmitDisabled(SubmitBlocker::EmptyDraft))
            ));
        }
        assert!(f.gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn refuses_after_failed_acquisition() {
        let f = fixture(ScriptedGateway::new().with_steps(vec![Step::fail()]));
        assert!(f.acquisition.acquire().await.is_err());
        f.submission.set_draft("SELECT 2;");

        assert_eq!(f.submission.can_submit().await, Err(SubmitBlocker::NoSession));
        assert!(f.submission.submit().await.is_err());
        assert!(f.gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn submits_draft_verbatim_with_session_token() {
        let f = fixture(ScriptedGateway::new().with_steps(vec![Step::ok("jwt-abc")]));
        f.acquisition.acquire().await.unwrap();
        f.submission.set_draft("  SELECT name FROM t;  ");

        assert_eq!(f.submission.can_submit().await, Ok(()));
        let result = f.submission.submit().await.unwrap();

        assert_eq!(result.body, serde_json::json!({"status": "ok"}));
        assert_eq!(
            f.gateway.submissions(),
            vec![("  SELECT name FROM t;  ".to_string(), "jwt-abc".to_string())]
        );
        assert_eq!(f.submission.phase(), SubmissionPhase::Submitted(result));
    }

    #[tokio::test]
    async fn failure_shows_generic_message() {
        let f = fixture(ScriptedGateway::new().failing_submissions());
        f.acquisition.acquire().await.unwrap();

        let err = f.submission.submit().await.unwrap_err();

        assert!(matches!(err, DomainError::Submission(_)));
        assert_eq!(
            f.submission.phase(),
            SubmissionPhase::SubmissionFailed {
                message: SUBMISSION_FAILED_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn repeated_submissions_are_not_deduplicated() {
        let f = fixture(ScriptedGateway::new());
        f.acquisition.acquire().await.unwrap();

        f.submission.submit().await.unwrap();
        f.submission.submit().await.unwrap();

        assert_eq!(f.gateway.submissions().len(), 2);
    }

    #[tokio::test]
    async fn reset_restores_default_without_network() {
        let f = fixture(ScriptedGateway::new());
        f.submission.set_draft("SELECT * FROM edited;");

        f.submission.reset_draft();

        assert_eq!(f.submission.draft(), DEFAULT_QUERY);
        assert_eq!(f.gateway.generate_calls(), 0);
        assert!(f.gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn regeneration_closes_gate_until_ready() {
        let f = fixture(ScriptedGateway::new().with_steps(vec![Step::ok("a"), Step::fail()]));
        f.acquisition.acquire().await.unwrap();
        assert_eq!(f.submission.can_submit().await, Ok(()));

        assert!(f.acquisition.regenerate().await.is_err());
        assert_eq!(f.submission.can_submit().await, Err(SubmitBlocker::NoSession));
    }

    #[tokio::test]
    async fn regeneration_waits_for_in_flight_submission() {
        let f = fixture(
            ScriptedGateway::new()
                .with_steps(vec![Step::ok("token-1"), Step::ok("token-2")])
                .slow_submissions(Duration::from_millis(150)),
        );
        f.acquisition.acquire().await.unwrap();
        f.submission.set_draft("SELECT 3;");

        let peek = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            (f.session.phase().await, f.submission.phase())
        };
        let regenerate = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            f.acquisition.regenerate().await
        };
        let (submitted, regenerated, (session_mid, submission_mid)) =
            tokio::join!(f.submission.submit(), regenerate, peek);

        assert!(matches!(session_mid, SessionPhase::Ready(ref a) if a.access_token == "token-1"));
        assert_eq!(submission_mid, SubmissionPhase::Submitting);
        assert!(submitted.is_ok());
        assert_eq!(regenerated.unwrap().access_token, "token-2");
        assert_eq!(
            f.gateway.submissions(),
            vec![("SELECT 3;".to_string(), "token-1".to_string())]
        );
        assert_eq!(f.session.artifact().await.unwrap().access_token, "token-2");
    }

    #[tokio::test]
    async fn submit_queued_behind_regeneration_sees_no_session() {
        let f = fixture(
            ScriptedGateway::new()
                .with_steps(vec![
                    Step::ok("token-1"),
                    Step::ok("token-2").delayed(Duration::from_millis(50)),
                ])
                .slow_submissions(Duration::from_millis(50)),
        );
        f.acquisition.acquire().await.unwrap();

        let regenerate = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            f.acquisition.regenerate().await
        };
        let second = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            f.submission.submit().await
        };
        let (first, regenerated, second) =
            tokio::join!(f.submission.submit(), regenerate, second);

        assert!(first.is_ok());
        assert!(regenerated.is_ok());
        assert!(matches!(
            second,
            Err(DomainError::SubmitDisabled(SubmitBlocker::NoSession))
        ));
        assert_eq!(f.gateway.submissions().len(), 1);

        f.submission.submit().await.unwrap();
        let tokens: Vec<String> = f.gateway.submissions().into_iter().map(|(_, t)| t).collect();
        assert_eq!(tokens, vec!["token-1".to_string(), "token-2".to_string()]);
    }

    #[tokio::test]
    async fn cancelled_submit_reopens_gate() {
        let f = fixture(ScriptedGateway::new().slow_submissions(Duration::from_secs(5)));
        f.acquisition.acquire().await.unwrap();

        let cancelled =
            tokio::time::timeout(Duration::from_millis(20), f.submission.submit()).await;

        assert!(cancelled.is_err());
        assert_eq!(f.submission.phase(), SubmissionPhase::Editing);
        assert_eq!(f.submission.can_submit().await, Ok(()));
        assert!(f.acquisition.regenerate().await.is_ok());
    }
}
