//! Manual Webhook Trigger - Entry Point
//!
//! One invocation: load config, build the sample `project.created` event,
//! sign it, POST it, report the outcome.

use anyhow::{Context, Result};
use tracing::{info, warn};

use hook_trigger::config::TriggerConfig;
use hook_trigger::delivery::{self, DeliveryError};
use hook_trigger::payload::ProjectCreated;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hook_trigger=info".into()),
        )
        .init();

    // Load configuration; bad config aborts before any request is attempted
    dotenvy::dotenv().ok();
    let config = TriggerConfig::from_env().context("configuration error")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %config.endpoint_url,
        "Manual webhook trigger"
    );

    // Build the sample event
    let data = ProjectCreated::sample();
    if data.is_placeholder() {
        warn!(
            "Sample project data still carries placeholder IDs; edit \
             ProjectCreated::sample() with real values from the projects table \
             before exercising a production receiver"
        );
    }
    let event = data.into_event().context("failed to build sample event")?;

    // One signed POST, bounded by the configured timeout
    let client = delivery::build_client(config.timeout).context("failed to build HTTP client")?;
    match delivery::send(&client, &config.endpoint_url, &event, &config.secret).await {
        Ok(receipt) => {
            info!(
                status = receipt.status,
                latency_ms = receipt.latency_ms,
                body = %receipt.body,
                "Webhook delivered; check receiver logs for processing details"
            );
            Ok(())
        }
        Err(e @ DeliveryError::Rejected { .. }) => {
            Err(anyhow::Error::new(e).context("receiver rejected the webhook"))
        }
        Err(e) => Err(anyhow::Error::new(e).context("webhook delivery failed")),
    }
}
