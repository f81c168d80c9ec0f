// src/infrastructure/notifications/queue.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    notifications::{NotificationDispatcher, NotificationJob, RetryPolicy},
    ports::notification::NotificationQueue,
};
use std::sync::Arc;
use tokio::{
    sync::mpsc::{self, Receiver, Sender, error::TrySendError},
    task::JoinHandle,
};

/// Bounded channel pair connecting request handlers to the worker.
pub fn notification_channel(capacity: usize) -> (ChannelNotificationQueue, Receiver<NotificationJob>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ChannelNotificationQueue { tx }, rx)
}

#[derive(Clone)]
pub struct ChannelNotificationQueue {
    tx: Sender<NotificationJob>,
}

impl NotificationQueue for ChannelNotificationQueue {
    fn enqueue(&self, job: NotificationJob) -> ApplicationResult<()> {
        self.tx.try_send(job).map_err(|err| match err {
            TrySendError::Full(_) => ApplicationError::infrastructure("notification queue is full"),
            TrySendError::Closed(_) => {
                ApplicationError::infrastructure("notification queue is closed")
            }
        })
    }
}

/// Drains queued jobs, retrying each with exponential backoff.
pub struct NotificationWorker {
    dispatcher: Arc<NotificationDispatcher>,
    policy: RetryPolicy,
}

impl NotificationWorker {
    pub fn new(dispatcher: Arc<NotificationDispatcher>, policy: RetryPolicy) -> Self {
        Self { dispatcher, policy }
    }

    /// Runs until every sender is dropped.
    pub fn spawn(self, rx: Receiver<NotificationJob>) -> JoinHandle<()> {
        tokio::spawn(self.run(rx))
    }

    pub async fn run(self, mut rx: Receiver<NotificationJob>) {
        while let Some(job) = rx.recv().await {
            self.process(&job).await;
        }
        tracing::debug!("notification queue closed, worker exiting");
    }

    /// Returns the number of attempts made.
    pub async fn process(&self, job: &NotificationJob) -> u32 {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.dispatcher.handle(job).await {
                Ok(_) => return attempt,
                Err(err) if attempt >= max_attempts => {
                    tracing::error!(?job, attempts = attempt, error = %err, "notification dropped");
                    return attempt;
                }
                Err(err) => {
                    let delay = self.policy.backoff_for(attempt);
                    tracing::warn!(?job, attempt, error = %err, ?delay, "notification failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
