// src/application/commands/articles/mod.rs
mod approve;
mod create;
mod delete;
mod service;
mod update;

pub use approve::{ARTICLE_APPROVED_MESSAGE, ApproveArticleCommand};
pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
