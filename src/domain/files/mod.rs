pub mod content_type;
pub mod entity;
pub mod repository;

pub use content_type::{ALLOWED_CONTENT_TYPES, DOCX_CONTENT_TYPE, is_allowed_content_type};
pub use entity::{ArticleFileKey, FileBundle, UploadedFile};
pub use repository::FileRegistry;
