//! Outbound webhook notifications for certificate state changes.
//!
//! Dispatch is best-effort and at-most-once: the request runs on a detached
//! task, failures are logged and never surfaced to the HTTP caller, and no
//! retry is attempted.

use std::time::Duration;

use crate::errors::AppError;

/// Fire-and-forget webhook client
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl Notifier {
    /// Build a notifier with a per-request timeout
    pub fn new(webhook_url: impl Into<String>, timeout_secs: u64) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }

    /// Dispatch a notification on a detached task.
    ///
    /// Returns immediately; the HTTP response to the caller never waits on
    /// webhook delivery.
    pub fn notify_detached(&self, certificate_id: i64, active: bool) {
        let notifier = self.clone();
        actix_web::rt::spawn(async move {
            notifier.notify(certificate_id, active).await;
        });
    }

    /// Deliver a single state-change notification, swallowing any failure
    pub async fn notify(&self, certificate_id: i64, active: bool) {
        let payload = notification_payload(certificate_id, active);

        match self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                log::debug!(
                    "Notified webhook of certificate {} state change",
                    certificate_id
                );
            }
            Ok(response) => {
                log::warn!(
                    "Webhook returned {} for certificate {} notification",
                    response.status(),
                    certificate_id
                );
            }
            Err(e) => {
                log::warn!(
                    "Failed to notify webhook for certificate {}: {}",
                    certificate_id,
                    e
                );
            }
        }
    }
}

/// Build the webhook payload: `{certificateId, message}`
fn notification_payload(certificate_id: i64, active: bool) -> serde_json::Value {
    serde_json::json!({
        "certificateId": certificate_id,
        "message": format!(
            "Certificate {} has been {}",
            certificate_id,
            if active { "activated" } else { "deactivated" }
        ),
    })
}
