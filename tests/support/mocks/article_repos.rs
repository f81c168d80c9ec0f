// tests/support/mocks/article_repos.rs
use article_desk::domain::{
    article::{
        Article, ArticleId, ArticleReadRepository, ArticleReplacement, ArticleWriteRepository,
        NewArticle,
    },
    department::DepartmentId,
    errors::{DomainError, DomainResult},
    user::UserId,
};
use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

/// Read and write repository over a map, counting writes so tests can
/// assert that nothing was persisted.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<BTreeMap<i64, Article>>,
    next_id: AtomicUsize,
    writes: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.articles.lock().unwrap();
            for article in articles {
                map.insert(article.id.into(), article);
            }
            repo.next_id.store(map.len(), Ordering::SeqCst);
        }
        repo
    }

    /// Every call fails with a persistence error from now on.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    fn check(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("database unavailable".into()))
        } else {
            Ok(())
        }
    }

    fn filtered(&self, keep: impl Fn(&Article) -> bool) -> DomainResult<Vec<Article>> {
        self.check()?;
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| keep(article))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let id = i64::try_from(self.next_id.fetch_add(1, Ordering::SeqCst) + 1).unwrap();
        let article = Article {
            id: ArticleId::new(id)?,
            department_id: new.department_id,
            user_id: new.user_id,
            title: new.title.clone(),
            content: new.content.clone(),
            is_approved: new.is_approved(),
            is_topic: new.is_topic,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        self.articles.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn replace(&self, replacement: ArticleReplacement) -> DomainResult<Article> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut map = self.articles.lock().unwrap();
        let existing = map
            .get_mut(&i64::from(replacement.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        existing.department_id = replacement.department_id;
        existing.user_id = replacement.user_id;
        existing.title = replacement.title;
        existing.content = replacement.content;
        existing.is_approved = replacement.is_approved;
        existing.is_topic = replacement.is_topic;
        existing.updated_at = replacement.updated_at;
        Ok(existing.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(self.articles.lock().unwrap().remove(&i64::from(id)).is_some())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.check()?;
        Ok(self.get(id.into()))
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        self.filtered(|_| true)
    }

    async fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Article>> {
        self.filtered(|article| article.user_id == user_id)
    }

    async fn list_by_department(&self, department_id: DepartmentId) -> DomainResult<Vec<Article>> {
        self.filtered(|article| article.department_id == department_id)
    }
}
