// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::department::DepartmentId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub department_id: DepartmentId,
    pub user_id: UserId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub is_approved: bool,
    pub is_topic: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Marks the article as approved. Approving twice is a no-op apart from
    /// the refreshed timestamp.
    pub fn approve(&mut self, now: DateTime<Utc>) {
        self.is_approved = true;
        self.updated_at = now;
    }

    pub fn into_replacement(self) -> ArticleReplacement {
        ArticleReplacement {
            id: self.id,
            department_id: self.department_id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            is_approved: self.is_approved,
            is_topic: self.is_topic,
            updated_at: self.updated_at,
        }
    }
}

/// A fresh submission. New articles always start unapproved, so there is no
/// approval field to set.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub department_id: DepartmentId,
    pub user_id: UserId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub is_topic: bool,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub const fn is_approved(&self) -> bool {
        false
    }
}

/// Every mutable column of a stored article. `created_at` is owned by the
/// store and survives replacement.
#[derive(Debug, Clone)]
pub struct ArticleReplacement {
    pub id: ArticleId,
    pub department_id: DepartmentId,
    pub user_id: UserId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub is_approved: bool,
    pub is_topic: bool,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            department_id: DepartmentId::new(2).unwrap(),
            user_id: UserId::new(3).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            content: ArticleContent::new("body"),
            is_approved: false,
            is_topic: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn approve_sets_flag_and_timestamp() {
        let mut article = sample_article();
        let now = Utc::now() + chrono::Duration::seconds(5);
        article.approve(now);
        assert!(article.is_approved);
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn approve_is_idempotent() {
        let mut article = sample_article();
        let now = Utc::now();
        article.approve(now);
        article.approve(now);
        assert!(article.is_approved);
        assert!(article.is_topic);
    }

    #[test]
    fn replacement_carries_current_state() {
        let mut article = sample_article();
        let now = Utc::now();
        article.approve(now);
        let replacement = article.clone().into_replacement();
        assert_eq!(replacement.id, article.id);
        assert!(replacement.is_approved);
        assert_eq!(replacement.updated_at, now);
    }
}
