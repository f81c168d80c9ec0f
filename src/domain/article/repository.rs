use crate::domain::article::entity::{Article, ArticleReplacement, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::department::DepartmentId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Full replacement of the stored record identified by `article.id`.
    /// Fails with `NotFound` when no such record exists.
    async fn replace(&self, article: ArticleReplacement) -> DomainResult<Article>;
    /// Returns `true` when a record was removed.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Article>>;
    async fn list_by_department(&self, department_id: DepartmentId) -> DomainResult<Vec<Article>>;
}
