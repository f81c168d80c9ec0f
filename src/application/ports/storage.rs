use crate::application::ApplicationResult;
use crate::domain::files::UploadedFile;
use async_trait::async_trait;

/// Durable home of uploaded files, independent of the per-article registry.
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Writes the file under its stored name, overwriting any namesake.
    async fn save(&self, file: &UploadedFile) -> ApplicationResult<()>;

    /// `true` when the upload directory is missing or holds no regular files.
    async fn is_empty(&self) -> ApplicationResult<bool>;

    /// Zips every file currently in the upload directory into a temporary
    /// archive called `archive_name`, returns its bytes, and removes the
    /// temporary file.
    async fn export_archive(&self, archive_name: &str) -> ApplicationResult<Vec<u8>>;
}
