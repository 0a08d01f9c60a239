//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/UI types here; adapters map wire payloads into these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller identity sent to the acquisition endpoint. Fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub email: String,
}

impl Identity {
    pub fn new(
        name: impl Into<String>,
        reg_no: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            reg_no: reg_no.into(),
            email: email.into(),
        }
    }
}

/// Webhook + access token pair for one registration identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionArtifact {
    pub webhook_url: String,
    /// Opaque token, forwarded verbatim as the `Authorization` header.
    pub access_token: String,
    /// Carried through from [`Identity::reg_no`]; never read from the remote response.
    pub registration_number: String,
    pub acquired_at: DateTime<Utc>,
}

impl SessionArtifact {
    /// Token shortened for display: first 15 chars, `...`, last 10 chars.
    /// Tokens of 25 chars or fewer are shown as-is.
    pub fn masked_token(&self) -> String {
        mask_token(&self.access_token)
    }
}

/// See [`SessionArtifact::masked_token`].
pub fn mask_token(token: &str) -> String {
    const HEAD: usize = 15;
    const TAIL: usize = 10;
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= HEAD + TAIL {
        return token.to_string();
    }
    let head: String = chars[..HEAD].iter().collect();
    let tail: String = chars[chars.len() - TAIL..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Opaque response body of the submission endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub body: serde_json::Value,
}

impl SubmissionResult {
    pub fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    /// Pretty-printed JSON for display.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}
