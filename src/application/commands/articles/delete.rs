use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser, error::ApplicationResult, permissions::ArticleAction,
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Returns whether a stored article was actually removed.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<bool> {
        self.guard.ensure(actor, ArticleAction::Delete).await?;

        let Ok(id) = ArticleId::new(command.id) else {
            return Ok(false);
        };
        let removed = self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, removed, "article delete requested");
        Ok(removed)
    }
}
