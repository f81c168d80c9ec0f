mod bundle;
mod export;
mod service;

pub use bundle::{GetArticleFilesQuery, NO_FILE_FOUND_MESSAGE};
pub use export::{NO_FILES_TO_EXPORT_MESSAGE, export_archive_name};
pub use service::FileQueryService;
