use crate::domain::errors::{DomainError, DomainResult};
use bytes::Bytes;
use std::fmt;

/// Registry key for uploaded files. Uploads address articles by the raw path
/// segment, so this is a string rather than an `ArticleId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleFileKey(String);

impl ArticleFileKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("Invalid articleId".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleFileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Final path component of the client supplied name, so a crafted
    /// `../../x` cannot escape the upload directory.
    pub fn stored_name(&self) -> &str {
        self.file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file_name)
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Ordered files most recently uploaded for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBundle {
    files: Vec<UploadedFile>,
}

impl FileBundle {
    pub fn new(files: Vec<UploadedFile>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Download name of the bundle: the first file's name plus `.zip`.
    pub fn archive_name(&self) -> Option<String> {
        self.files
            .first()
            .map(|file| format!("{}.zip", file.file_name))
    }
}
