use crate::domain::errors::DomainResult;
use crate::domain::files::entity::{ArticleFileKey, FileBundle, UploadedFile};
use async_trait::async_trait;
use std::sync::Arc;

/// Per-article store of the most recent upload batch.
#[async_trait]
pub trait FileRegistry: Send + Sync {
    /// Replaces whatever was registered for `key` with `files`. Readers
    /// observe either the previous bundle or the new one.
    async fn replace(&self, key: &ArticleFileKey, files: Vec<UploadedFile>) -> DomainResult<()>;
    async fn get(&self, key: &ArticleFileKey) -> DomainResult<Option<Arc<FileBundle>>>;
}
