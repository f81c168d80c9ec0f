use crate::application::ApplicationResult;
use crate::domain::files::UploadedFile;

pub trait BundleArchiver: Send + Sync {
    /// Builds an in-memory archive holding one entry per file, in order.
    fn bundle(&self, files: &[UploadedFile]) -> ApplicationResult<Vec<u8>>;
}
