use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        permissions::ArticleAction,
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Looks an article up by id. A missing article is not an error here:
    /// existing clients expect a successful response with no data. Ids that
    /// can never exist (zero or below) are answered the same way.
    pub async fn get_article_by_id(
        &self,
        actor: &AuthenticatedUser,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<Option<ArticleDto>> {
        self.guard.ensure(actor, ArticleAction::Get).await?;

        let Ok(id) = ArticleId::new(query.id) else {
            return Ok(None);
        };
        let article = self.read_repo.find_by_id(id).await?;
        Ok(article.map(Into::into))
    }
}
