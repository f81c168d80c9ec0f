mod log_mailer;
mod queue;
mod smtp_mailer;

pub use log_mailer::LogMailer;
pub use queue::{ChannelNotificationQueue, NotificationWorker, notification_channel};
pub use smtp_mailer::{DEFAULT_SMTP_PORT, MailError, SmtpConfig, SmtpMailer};
