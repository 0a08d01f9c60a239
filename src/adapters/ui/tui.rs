//! Implements InputPort. Inquire-based interactive menu.
//!
//! Acquires a webhook on start, then loops over a menu that only lists the actions the
//! current phase allows (submit is absent while the gate is closed).

use crate::adapters::ui::progress::with_spinner;
use crate::domain::{
    DomainError, SUBMISSION_FAILED_MESSAGE, SessionPhase, SubmitBlocker, assignment_for,
};
use crate::ports::InputPort;
use crate::usecases::{AcquisitionService, SessionStore, SubmissionService};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;

/// Prompt theme matching the banner colors. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightBlue))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

fn toast_success(msg: &str) {
    println!("{}", format!("✔ {}", msg).green());
}

fn toast_error(msg: &str) {
    println!("{}", format!("✖ {}", msg).red());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ShowWebhook,
    Regenerate,
    EditQuery,
    ResetQuery,
    Submit,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MenuAction::ShowWebhook => "Show webhook details",
            MenuAction::Regenerate => "Regenerate webhook",
            MenuAction::EditQuery => "Edit SQL query",
            MenuAction::ResetQuery => "Reset SQL query",
            MenuAction::Submit => "Submit solution",
            MenuAction::Quit => "Quit",
        };
        f.write_str(s)
    }
}

/// Menu entries offered for the given state, in display order.
fn menu_actions(
    phase: &SessionPhase,
    draft_is_default: bool,
    gate: Result<(), SubmitBlocker>,
) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::ShowWebhook];
    if !phase.is_acquiring() {
        actions.push(MenuAction::Regenerate);
    }
    if phase.artifact().is_some() {
        actions.push(MenuAction::EditQuery);
    }
    if !draft_is_default {
        actions.push(MenuAction::ResetQuery);
    }
    if gate.is_ok() {
        actions.push(MenuAction::Submit);
    }
    actions.push(MenuAction::Quit);
    actions
}

/// Lines describing the session: loading, failure, or webhook details and problem type.
fn describe_session(phase: &SessionPhase) -> Vec<String> {
    match phase {
        SessionPhase::Idle | SessionPhase::Acquiring { .. } => vec!["Loading...".to_string()],
        SessionPhase::AcquisitionFailed { message } => vec![
            "Failed to load webhook data. Please try again.".to_string(),
            format!("Error: {}", message),
        ],
        SessionPhase::Ready(artifact) => {
            let assignment = assignment_for(&artifact.registration_number);
            let mut lines = vec![
                format!("Webhook URL:        {}", artifact.webhook_url),
                format!("Access Token (JWT): {}", artifact.masked_token()),
                format!("Your Problem Type:  {}", assignment),
            ];
            if let Some(link) = assignment.reference_link() {
                lines.push(format!("Problem Statement:  {}", link));
            }
            lines.push(format!(
                "Generated at:       {}",
                artifact.acquired_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            lines
        }
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    acquisition: Arc<AcquisitionService>,
    submission: Arc<SubmissionService>,
    session: Arc<SessionStore>,
}

impl TuiInputPort {
    pub fn new(
        acquisition: Arc<AcquisitionService>,
        submission: Arc<SubmissionService>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            acquisition,
            submission,
            session,
        }
    }

    async fn acquire_on_start(&self) {
        match with_spinner("Generating webhook...", self.acquisition.acquire()).await {
            Ok(_) => toast_success("Webhook generated successfully!"),
            Err(DomainError::Superseded { .. }) => {}
            Err(_) => toast_error("Failed to generate webhook"),
        }
        self.show_webhook().await;
    }

    async fn regenerate(&self) {
        match with_spinner("Regenerating webhook...", self.acquisition.regenerate()).await {
            Ok(_) => toast_success("Webhook regenerated successfully!"),
            Err(DomainError::Superseded { .. }) => {}
            Err(_) => toast_error("Failed to regenerate webhook"),
        }
        self.show_webhook().await;
    }

    async fn show_webhook(&self) {
        let phase = self.session.phase().await;
        let failed = matches!(phase, SessionPhase::AcquisitionFailed { .. });
        for line in describe_session(&phase) {
            if failed {
                println!("{}", line.red());
            } else {
                println!("{}", line);
            }
        }
    }

    async fn edit_query(&self) -> Result<(), DomainError> {
        let current = self.submission.draft();
        let edited = Text::new("Your SQL query solution:")
            .with_initial_value(&current)
            .with_placeholder("Write your SQL query here...")
            .prompt();
        match edited {
            Ok(text) => {
                self.submission.set_draft(text);
                Ok(())
            }
            Err(InquireError::OperationCanceled) => Ok(()),
            Err(e) => Err(DomainError::Ui(e.to_string())),
        }
    }

    async fn reset_query(&self) {
        self.submission.reset_draft();
        toast_success("Query reset");
    }

    async fn submit(&self) {
        match with_spinner("Submitting...", self.submission.submit()).await {
            Ok(result) => {
                toast_success("Solution submitted successfully!");
                println!("Success: Your solution was successfully submitted.");
                println!("{}", result.pretty());
            }
            Err(DomainError::SubmitDisabled(SubmitBlocker::NoSession)) => {
                toast_error("No access token available");
            }
            Err(DomainError::SubmitDisabled(reason)) => toast_error(&reason.to_string()),
            Err(_) => {
                toast_error("Failed to submit solution");
                println!("{}", SUBMISSION_FAILED_MESSAGE.red());
            }
        }
    }

    async fn next_action(&self) -> Result<MenuAction, DomainError> {
        let phase = self.session.phase().await;
        let draft_is_default = self.submission.draft() == self.submission.default_query();
        let gate = self.submission.can_submit().await;
        let actions = menu_actions(&phase, draft_is_default, gate);

        match Select::new("What next?", actions).prompt() {
            Ok(action) => Ok(action),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(MenuAction::Quit)
            }
            Err(e) => Err(DomainError::Ui(e.to_string())),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        self.acquire_on_start().await;

        loop {
            match self.next_action().await? {
                MenuAction::ShowWebhook => self.show_webhook().await,
                MenuAction::Regenerate => self.regenerate().await,
                MenuAction::EditQuery => self.edit_query().await?,
                MenuAction::ResetQuery => self.reset_query().await,
                MenuAction::Submit => self.submit().await,
                MenuAction::Quit => return Ok(()),
            }
        }
    }
}
