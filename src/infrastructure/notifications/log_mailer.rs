use crate::application::{
    error::ApplicationResult,
    ports::notification::{Mailer, OutgoingMail},
};
use async_trait::async_trait;

/// Fallback used when no SMTP relay is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()> {
        tracing::info!(
            recipients = mail.recipients.len(),
            subject = %mail.subject,
            "smtp not configured; email logged only"
        );
        Ok(())
    }
}
