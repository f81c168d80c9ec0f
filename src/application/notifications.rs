// src/application/notifications.rs
use crate::application::{
    error::ApplicationResult,
    ports::notification::{Mailer, OutgoingMail},
};
use crate::domain::{
    article::ArticleId,
    department::DepartmentId,
    user::{DepartmentDirectory, EmailAddress},
};
use std::{sync::Arc, time::Duration};

pub const ARTICLE_CREATED_SUBJECT: &str = "New Article Created";
pub const ARTICLE_CREATED_BODY: &str =
    "A new article has been created in your department. Please check it out!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationJob {
    ArticleCreated {
        article_id: ArticleId,
        department_id: DepartmentId,
    },
}

impl NotificationJob {
    pub const fn department_id(&self) -> DepartmentId {
        match self {
            Self::ArticleCreated { department_id, .. } => *department_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based), doubling each time.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.initial_backoff.saturating_mul(1 << exponent)
    }
}

/// Sends the department-wide email announcing a new submission.
pub struct NotificationDispatcher {
    directory: Arc<dyn DepartmentDirectory>,
    mailer: Arc<dyn Mailer>,
}

impl NotificationDispatcher {
    pub fn new(directory: Arc<dyn DepartmentDirectory>, mailer: Arc<dyn Mailer>) -> Self {
        Self { directory, mailer }
    }

    /// Returns how many recipients the email went to. Departments without
    /// reachable members produce no email.
    pub async fn notify_department(&self, department_id: DepartmentId) -> ApplicationResult<usize> {
        let members = self.directory.members_of(department_id).await?;
        let mut recipients: Vec<EmailAddress> = Vec::with_capacity(members.len());
        for email in members.into_iter().filter_map(|member| member.email) {
            if !recipients.contains(&email) {
                recipients.push(email);
            }
        }

        if recipients.is_empty() {
            tracing::debug!(%department_id, "no department members to notify");
            return Ok(0);
        }

        let count = recipients.len();
        self.mailer
            .send(OutgoingMail {
                recipients,
                subject: ARTICLE_CREATED_SUBJECT.to_string(),
                body: ARTICLE_CREATED_BODY.to_string(),
            })
            .await?;

        tracing::info!(%department_id, recipients = count, "department notified");
        Ok(count)
    }

    pub async fn handle(&self, job: &NotificationJob) -> ApplicationResult<usize> {
        self.notify_department(job.department_id()).await
    }
}
