use super::FileQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, FileDownload},
        error::{ApplicationError, ApplicationResult},
        permissions::ArticleAction,
    },
};
use chrono::{DateTime, Utc};

pub const NO_FILES_TO_EXPORT_MESSAGE: &str = "No files found to export";

/// `ExportedFiles_yyyyMMddHHmmss.zip`, second precision.
pub fn export_archive_name(now: DateTime<Utc>) -> String {
    format!("ExportedFiles_{}.zip", now.format("%Y%m%d%H%M%S"))
}

impl FileQueryService {
    /// Archives everything currently in the upload directory. This reads the
    /// directory itself, so files from every article (and from replaced
    /// uploads) are included.
    pub async fn export_files(&self, actor: &AuthenticatedUser) -> ApplicationResult<FileDownload> {
        self.guard.ensure(actor, ArticleAction::Export).await?;

        if self.store.is_empty().await? {
            return Err(ApplicationError::not_found(NO_FILES_TO_EXPORT_MESSAGE));
        }

        let file_name = export_archive_name(self.clock.now());
        let bytes = self.store.export_archive(&file_name).await?;
        tracing::info!(archive = %file_name, size = bytes.len(), "upload directory exported");
        Ok(FileDownload::zip(file_name, bytes))
    }
}
