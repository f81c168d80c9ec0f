use crate::application::{ApplicationResult, notifications::NotificationJob};
use crate::domain::user::EmailAddress;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub recipients: Vec<EmailAddress>,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()>;
}

/// Hand-off point between request handlers and the notification worker.
/// Implementations must not block the caller.
pub trait NotificationQueue: Send + Sync {
    fn enqueue(&self, job: NotificationJob) -> ApplicationResult<()>;
}
