mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::{ListArticlesByDepartmentQuery, ListArticlesByUserQuery};
pub use service::ArticleQueryService;
