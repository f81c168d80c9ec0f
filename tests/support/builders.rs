// tests/support/builders.rs
use article_desk::domain::{
    article::{Article, ArticleContent, ArticleId, ArticleTitle},
    department::DepartmentId,
    user::UserId,
};

pub struct ArticleBuilder {
    id: i64,
    department_id: i64,
    user_id: i64,
    title: String,
    content: String,
    approved: bool,
    topic: bool,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            department_id: 1,
            user_id: 1,
            title: "Test Article".into(),
            content: "Test content".into(),
            approved: false,
            topic: false,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn department(mut self, department_id: i64) -> Self {
        self.department_id = department_id;
        self
    }

    pub fn author(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }

    pub fn topic(mut self) -> Self {
        self.topic = true;
        self
    }

    pub fn build(self) -> Article {
        let now = super::mocks::fixed_now();
        Article {
            id: ArticleId::new(self.id).unwrap(),
            department_id: DepartmentId::new(self.department_id).unwrap(),
            user_id: UserId::new(self.user_id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content),
            is_approved: self.approved,
            is_topic: self.topic,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
