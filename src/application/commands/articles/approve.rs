use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, MessageDto},
        error::{ApplicationError, ApplicationResult},
        permissions::ArticleAction,
    },
    domain::article::ArticleId,
};

pub const ARTICLE_APPROVED_MESSAGE: &str = "Article approved successfully";

pub struct ApproveArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn approve_article(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<MessageDto> {
        self.guard.ensure(actor, ArticleAction::Approve).await?;

        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("Article not found"))?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        article.approve(self.clock.now());
        self.write_repo.replace(article.into_replacement()).await?;

        tracing::info!(article_id = %id, approved_by = %actor.id, "article approved");
        Ok(MessageDto::new(ARTICLE_APPROVED_MESSAGE))
    }
}
