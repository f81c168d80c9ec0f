// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleReplacement, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::department::DepartmentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str =
    "id, department_id, user_id, title, content, is_approved, is_topic, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, clause: &str, value: i64) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE {clause} = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    department_id: i64,
    user_id: i64,
    title: String,
    content: String,
    is_approved: bool,
    is_topic: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            department_id: DepartmentId::new(row.department_id)?,
            user_id: UserId::new(row.user_id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content),
            is_approved: row.is_approved,
            is_topic: row.is_topic,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let is_approved = article.is_approved();
        let NewArticle {
            department_id,
            user_id,
            title,
            content,
            is_topic,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (department_id, user_id, title, content, is_approved, is_topic, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(department_id))
            .bind(i64::from(user_id))
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(is_approved)
            .bind(is_topic)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn replace(&self, article: ArticleReplacement) -> DomainResult<Article> {
        let ArticleReplacement {
            id,
            department_id,
            user_id,
            title,
            content,
            is_approved,
            is_topic,
            updated_at,
        } = article;

        let sql = format!(
            "UPDATE articles
             SET department_id = $2, user_id = $3, title = $4, content = $5,
                 is_approved = $6, is_topic = $7, updated_at = $8
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .bind(i64::from(department_id))
            .bind(i64::from(user_id))
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(is_approved)
            .bind(is_topic)
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Article>> {
        self.fetch_where("user_id", user_id.into()).await
    }

    async fn list_by_department(&self, department_id: DepartmentId) -> DomainResult<Vec<Article>> {
        self.fetch_where("department_id", department_id.into()).await
    }
}
