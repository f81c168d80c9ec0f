// tests/support/mocks/notifications.rs
use article_desk::application::{
    ApplicationResult,
    error::ApplicationError,
    notifications::NotificationJob,
    ports::notification::{Mailer, NotificationQueue, OutgoingMail},
};
use article_desk::domain::{
    department::DepartmentId,
    errors::DomainResult,
    user::{DepartmentDirectory, DepartmentMember, EmailAddress, UserId},
};
use async_trait::async_trait;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicU32, Ordering},
};

/// Queue that keeps every job instead of handing it to a worker.
#[derive(Debug, Default)]
pub struct RecordingQueue {
    jobs: Mutex<Vec<NotificationJob>>,
    rejecting: AtomicBool,
}

impl RecordingQueue {
    pub fn rejecting() -> Self {
        let queue = Self::default();
        queue.rejecting.store(true, Ordering::SeqCst);
        queue
    }

    pub fn jobs(&self) -> Vec<NotificationJob> {
        self.jobs.lock().unwrap().clone()
    }
}

impl NotificationQueue for RecordingQueue {
    fn enqueue(&self, job: NotificationJob) -> ApplicationResult<()> {
        if self.rejecting.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("notification queue is full"));
        }
        self.jobs.lock().unwrap().push(job);
        Ok(())
    }
}

/// Fails the first `failures` sends, then records every mail.
#[derive(Debug, Default)]
pub struct FlakyMailer {
    failures: AtomicU32,
    attempts: AtomicU32,
    sent: Mutex<Vec<OutgoingMail>>,
}

impl FlakyMailer {
    pub fn failing(failures: u32) -> Self {
        Self {
            failures: AtomicU32::new(failures),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FlakyMailer {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(ApplicationError::infrastructure("smtp relay unavailable"));
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct StaticDirectory {
    members: Vec<DepartmentMember>,
}

impl StaticDirectory {
    /// `(user id, department id, email)` triples.
    pub fn with_members(members: &[(i64, i64, Option<&str>)]) -> Self {
        let members = members
            .iter()
            .map(|(id, department, email)| DepartmentMember {
                id: UserId::new(*id).unwrap(),
                username: format!("user{id}"),
                department_id: DepartmentId::new(*department).unwrap(),
                email: email.map(|e| EmailAddress::new(e).unwrap()),
            })
            .collect();
        Self { members }
    }
}

#[async_trait]
impl DepartmentDirectory for StaticDirectory {
    async fn members_of(&self, department_id: DepartmentId) -> DomainResult<Vec<DepartmentMember>> {
        Ok(self
            .members
            .iter()
            .filter(|member| member.department_id == department_id)
            .cloned()
            .collect())
    }
}
