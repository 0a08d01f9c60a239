//! Application configuration. Identity, endpoints, default query.
//!
//! Every field is optional; the defaults reproduce the fixed identity and endpoints of the
//! hiring challenge, so an empty environment behaves like the hardcoded client.

use crate::domain::Identity;
use serde::Deserialize;

pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_REG_NO: &str = "REG12347";
pub const DEFAULT_EMAIL: &str = "john@example.com";
pub const DEFAULT_GENERATE_URL: &str =
    "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA";
pub const DEFAULT_SUBMIT_URL: &str = "https://bfhldevapigw.healthrx.co.in/hiring/testWebhook/JAVA";
/// The query editor starts empty.
pub const DEFAULT_QUERY: &str = "";
pub const DEFAULT_MOCK_DELAY_MS: u64 = 300;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Read from WEBHOOK_SUBMIT_NAME.
    #[serde(default)]
    pub name: Option<String>,

    /// Registration number; its last digit selects the problem. Read from WEBHOOK_SUBMIT_REG_NO.
    #[serde(default)]
    pub reg_no: Option<String>,

    /// Read from WEBHOOK_SUBMIT_EMAIL.
    #[serde(default)]
    pub email: Option<String>,

    /// Webhook generation endpoint. Read from WEBHOOK_SUBMIT_GENERATE_URL.
    #[serde(default)]
    pub generate_url: Option<String>,

    /// Solution submission endpoint. Read from WEBHOOK_SUBMIT_SUBMIT_URL.
    #[serde(default)]
    pub submit_url: Option<String>,

    /// Initial draft and the value restored by "Reset SQL query". Read from WEBHOOK_SUBMIT_DEFAULT_QUERY.
    #[serde(default)]
    pub default_query: Option<String>,

    /// Use the in-memory mock gateway instead of HTTP. Read from WEBHOOK_SUBMIT_MOCK.
    #[serde(default)]
    pub mock: Option<bool>,

    /// Simulated latency of the mock gateway. Read from WEBHOOK_SUBMIT_MOCK_DELAY_MS.
    #[serde(default)]
    pub mock_delay_ms: Option<u64>,
}

impl AppConfig {
    /// Load from `.env`, `WEBHOOK_SUBMIT_*` variables, and the optional file named by
    /// `WEBHOOK_SUBMIT_CONFIG` (file values win over the environment).
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("WEBHOOK_SUBMIT"));
        if let Ok(path) = std::env::var("WEBHOOK_SUBMIT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn identity(&self) -> Identity {
        Identity::new(
            self.name.as_deref().unwrap_or(DEFAULT_NAME),
            self.reg_no.as_deref().unwrap_or(DEFAULT_REG_NO),
            self.email.as_deref().unwrap_or(DEFAULT_EMAIL),
        )
    }

    pub fn generate_url_or_default(&self) -> String {
        self.generate_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GENERATE_URL.to_string())
    }

    pub fn submit_url_or_default(&self) -> String {
        self.submit_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBMIT_URL.to_string())
    }

    pub fn default_query_or_default(&self) -> String {
        self.default_query
            .clone()
            .unwrap_or_else(|| DEFAULT_QUERY.to_string())
    }

    pub fn is_mock(&self) -> bool {
        self.mock.unwrap_or(false)
    }

    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(DEFAULT_MOCK_DELAY_MS)
    }
}
