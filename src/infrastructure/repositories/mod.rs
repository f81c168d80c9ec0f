// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_department;
mod postgres_permission;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_department::PostgresDepartmentDirectory;
pub use postgres_permission::PostgresPermissionGate;
