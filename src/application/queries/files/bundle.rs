use super::FileQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, FileDownload},
        error::{ApplicationError, ApplicationResult},
        permissions::ArticleAction,
    },
    domain::files::ArticleFileKey,
};
use std::sync::Arc;

pub const NO_FILE_FOUND_MESSAGE: &str = "No file found for the specified ArticleId";

pub struct GetArticleFilesQuery {
    pub article_id: String,
}

impl FileQueryService {
    /// Zips the files last uploaded for an article, in upload order.
    pub async fn get_article_files(
        &self,
        actor: &AuthenticatedUser,
        query: GetArticleFilesQuery,
    ) -> ApplicationResult<FileDownload> {
        self.guard.ensure(actor, ArticleAction::Download).await?;

        let key = ArticleFileKey::new(query.article_id)
            .map_err(|_| ApplicationError::not_found(NO_FILE_FOUND_MESSAGE))?;
        let bundle = self
            .registry
            .get(&key)
            .await?
            .filter(|bundle| !bundle.is_empty())
            .ok_or_else(|| ApplicationError::not_found(NO_FILE_FOUND_MESSAGE))?;
        let file_name = bundle
            .archive_name()
            .ok_or_else(|| ApplicationError::not_found(NO_FILE_FOUND_MESSAGE))?;

        let archiver = Arc::clone(&self.archiver);
        let bytes = tokio::task::spawn_blocking(move || archiver.bundle(bundle.files()))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))??;

        tracing::debug!(article_id = %key, size = bytes.len(), "article bundle built");
        Ok(FileDownload::zip(file_name, bytes))
    }
}
