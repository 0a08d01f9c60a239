//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No workflow logic here; acquisition and submission live in the use cases.

use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use webhook_submit::adapters::http::{HttpChallengeGateway, MockChallengeGateway};
use webhook_submit::adapters::ui::tui::TuiInputPort;
use webhook_submit::ports::{ChallengeGateway, InputPort};
use webhook_submit::shared::config::AppConfig;
use webhook_submit::usecases::{AcquisitionService, SessionStore, SubmissionService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // Default to warn so log lines do not interleave with the prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed; using defaults");
        AppConfig::default()
    });

    // --- Gateway ---
    let gateway: Arc<dyn ChallengeGateway> = if cfg.is_mock() {
        warn!("WEBHOOK_SUBMIT_MOCK set, using mock challenge gateway");
        Arc::new(MockChallengeGateway::with_delay(
            cfg.mock_delay_ms_or_default(),
        ))
    } else {
        info!(
            generate_url = %cfg.generate_url_or_default(),
            submit_url = %cfg.submit_url_or_default(),
            "using HTTP challenge gateway"
        );
        Arc::new(HttpChallengeGateway::new(
            cfg.generate_url_or_default(),
            cfg.submit_url_or_default(),
        ))
    };

    // --- Services ---
    let session = Arc::new(SessionStore::new());
    let acquisition = Arc::new(AcquisitionService::new(
        Arc::clone(&gateway),
        cfg.identity(),
        Arc::clone(&session),
    ));
    let submission = Arc::new(SubmissionService::new(
        Arc::clone(&gateway),
        Arc::clone(&session),
        cfg.default_query_or_default(),
    ));

    webhook_submit::adapters::ui::init_ui(acquisition.identity());

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&acquisition),
        Arc::clone(&submission),
        Arc::clone(&session),
    ));

    // --- Run (acquire on start -> menu loop) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
