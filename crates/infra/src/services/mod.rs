mod email;
mod webhook;

pub use email::{IEmailSender, NoopEmailSender};
pub use webhook::{ITaskNotifier, NotifyError, WebhookNotifier};
