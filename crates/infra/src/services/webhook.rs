use reqwest::Client;
use std::time::Duration;
use taskdeck_domain::TaskReminderNotification;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Webhook request timed out")]
    Timeout,
    #[error("Webhook request failed: {0}")]
    Network(String),
    #[error("Webhook responded with status code: {0}")]
    UnexpectedStatusCode(u16),
}

/// Delivers reminder notifications about `Task`s
#[async_trait::async_trait]
pub trait ITaskNotifier: Send + Sync {
    async fn notify(
        &self,
        webhook_url: &str,
        notification: &TaskReminderNotification,
    ) -> Result<(), NotifyError>;
}

/// Posts notifications as json to webhooks. Every request is bounded by the
/// configured timeout.
pub struct WebhookNotifier {
    client: Client,
}

impl WebhookNotifier {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ITaskNotifier for WebhookNotifier {
    async fn notify(
        &self,
        webhook_url: &str,
        notification: &TaskReminderNotification,
    ) -> Result<(), NotifyError> {
        let res = self
            .client
            .post(webhook_url)
            .json(notification)
            .send()
            .await
            .map_err(|e| {
                warn!(
                    "[Network Error] Reminder webhook: {} failed. Error message: {:?}",
                    webhook_url, e
                );
                if e.is_timeout() {
                    NotifyError::Timeout
                } else {
                    NotifyError::Network(e.to_string())
                }
            })?;

        let status = res.status();
        if !status.is_success() {
            warn!(
                "[Unexpected Response] Reminder webhook: {} responded with: {}",
                webhook_url, status
            );
            return Err(NotifyError::UnexpectedStatusCode(status.as_u16()));
        }
        Ok(())
    }
}
