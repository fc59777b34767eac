use tracing::debug;

/// Sends reminder emails to the assignee of a `Task`
#[async_trait::async_trait]
pub trait IEmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Email delivery is not wired to any provider yet. This sender only logs what would
/// have been sent.
pub struct NoopEmailSender {}

#[async_trait::async_trait]
impl IEmailSender for NoopEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        debug!("Skipping email to {}: {} - {}", to, subject, body);
        Ok(())
    }
}
