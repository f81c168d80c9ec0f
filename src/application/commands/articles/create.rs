// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        notifications::NotificationJob,
        permissions::ArticleAction,
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle},
        department::DepartmentId,
        user::UserId,
    },
};

pub struct CreateArticleCommand {
    pub department_id: i64,
    /// Author; the caller when absent.
    pub user_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub is_topic: bool,
}

impl ArticleCommandService {
    /// Submits a new article. The result is always unapproved; approval only
    /// happens through [`ArticleCommandService::approve_article`].
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.guard.ensure(actor, ArticleAction::Create).await?;

        let department_id = DepartmentId::new(command.department_id)?;
        let user_id = match command.user_id {
            Some(id) => UserId::new(id)?,
            None => actor.id,
        };
        let new_article = NewArticle {
            department_id,
            user_id,
            title: ArticleTitle::new(command.title)?,
            content: ArticleContent::new(command.content),
            is_topic: command.is_topic,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, %department_id, "article submitted");

        let job = NotificationJob::ArticleCreated {
            article_id: created.id,
            department_id,
        };
        if let Err(err) = self.notifications.enqueue(job) {
            tracing::warn!(error = %err, %department_id, "failed to queue department notification");
        }

        Ok(created.into())
    }
}
