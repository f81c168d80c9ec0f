mod service;
mod upload;

pub use service::FileCommandService;
pub use upload::{UploadFilesCommand, UploadPermit, upload_success_message};
