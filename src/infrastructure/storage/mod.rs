mod local_upload_store;
mod zip_archiver;

pub use local_upload_store::LocalUploadStore;
pub use zip_archiver::{ZipBundleArchiver, write_zip};
