use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        permissions::ArticleAction,
    },
    domain::{department::DepartmentId, user::UserId},
};

pub struct ListArticlesByUserQuery {
    pub user_id: i64,
}

pub struct ListArticlesByDepartmentQuery {
    pub department_id: i64,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        self.guard.ensure(actor, ArticleAction::List).await?;

        let records = self.read_repo.list_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_articles_by_user(
        &self,
        actor: &AuthenticatedUser,
        query: ListArticlesByUserQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        self.guard.ensure(actor, ArticleAction::ListByUser).await?;

        let user_id = UserId::new(query.user_id)?;
        let records = self.read_repo.list_by_user(user_id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_articles_by_department(
        &self,
        actor: &AuthenticatedUser,
        query: ListArticlesByDepartmentQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        self.guard
            .ensure(actor, ArticleAction::ListByDepartment)
            .await?;

        let department_id = DepartmentId::new(query.department_id)?;
        let records = self.read_repo.list_by_department(department_id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
