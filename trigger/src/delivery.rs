//! Webhook Delivery
//!
//! One signed HTTP POST to the configured receiver. The envelope is
//! serialized once, signed over those exact bytes, and those bytes become the
//! request body. No retries: a failed invocation is reported and the decision
//! to re-run stays with the operator.

use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::payload::WebhookEvent;

/// Header carrying the hex-encoded HMAC-SHA256 signature of the body.
pub const SIGNATURE_HEADER: &str = "X-Supabase-Signature";

#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Connection refused, DNS failure, or timeout before a response arrived.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The receiver answered with a non-2xx status.
    #[error("receiver rejected delivery with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of an accepted (2xx) delivery.
#[derive(Debug)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub body: String,
    pub latency_ms: u64,
}

/// Build the HTTP client for a trigger invocation. The timeout bounds the
/// whole request; on expiry the send fails with a timeout error.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Sign and POST one webhook event.
pub async fn send(
    client: &reqwest::Client,
    url: &str,
    event: &WebhookEvent,
    secret: &str,
) -> Result<DeliveryReceipt, DeliveryError> {
    let payload_bytes = event.canonical_bytes()?;
    let signature = hook_signing::sign_payload(secret, &payload_bytes);

    info!(
        event_type = %event.event,
        url,
        payload_len = payload_bytes.len(),
        "Sending webhook"
    );

    let start = std::time::Instant::now();
    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .header(SIGNATURE_HEADER, signature)
        .body(payload_bytes)
        .send()
        .await?;
    let latency_ms = start.elapsed().as_millis() as u64;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        info!(status = status.as_u16(), latency_ms, "Webhook accepted");
        Ok(DeliveryReceipt {
            status: status.as_u16(),
            body,
            latency_ms,
        })
    } else {
        warn!(status = status.as_u16(), latency_ms, "Webhook rejected");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
