use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        permissions::ArticleAction,
    },
    domain::{
        article::{ArticleContent, ArticleId, ArticleReplacement, ArticleTitle},
        department::DepartmentId,
        user::UserId,
    },
};

/// Full replacement of an article. `id` always comes from the route, never
/// from the request body.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub department_id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub is_approved: bool,
    pub is_topic: bool,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.guard.ensure(actor, ArticleAction::Update).await?;

        let replacement = ArticleReplacement {
            id: ArticleId::new(command.id)
                .map_err(|_| ApplicationError::not_found("article not found"))?,
            department_id: DepartmentId::new(command.department_id)?,
            user_id: UserId::new(command.user_id)?,
            title: ArticleTitle::new(command.title)?,
            content: ArticleContent::new(command.content),
            is_approved: command.is_approved,
            is_topic: command.is_topic,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.replace(replacement).await?;
        tracing::info!(article_id = %updated.id, "article replaced");
        Ok(updated.into())
    }
}
