// src/infrastructure/storage/local_upload_store.rs
use super::write_zip;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::UploadStore,
};
use crate::domain::files::UploadedFile;
use async_trait::async_trait;
use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Upload directory on local disk plus a scratch directory for export
/// archives.
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    upload_dir: PathBuf,
    scratch_dir: PathBuf,
}

impl LocalUploadStore {
    pub fn new(upload_dir: impl Into<PathBuf>, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Regular files directly inside the upload directory, sorted by name.
    /// A missing directory yields an empty list.
    async fn regular_files(&self) -> ApplicationResult<Vec<PathBuf>> {
        let mut entries = match tokio::fs::read_dir(&self.upload_dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(io_error("read upload directory", &err)),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| io_error("read upload directory", &err))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|err| io_error("inspect upload", &err))?;
            if file_type.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn io_error(action: &str, err: &std::io::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("failed to {action}: {err}"))
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_archive(archive_path: &Path, sources: &[PathBuf]) -> ApplicationResult<()> {
    let file = File::create(archive_path).map_err(|err| io_error("create archive", &err))?;
    let mut entries = Vec::with_capacity(sources.len());
    for source in sources {
        let bytes = std::fs::read(source).map_err(|err| io_error("read upload", &err))?;
        entries.push((entry_name(source), bytes));
    }
    let mut writer = write_zip(BufWriter::new(file), entries)?;
    writer.flush().map_err(|err| io_error("flush archive", &err))
}

/// Writes the archive to `archive_path`, reads it back and removes it. The
/// scratch file is removed whether or not the build succeeded.
async fn build_archive(archive_path: PathBuf, sources: Vec<PathBuf>) -> ApplicationResult<Vec<u8>> {
    let build_path = archive_path.clone();
    let built = tokio::task::spawn_blocking(move || write_archive(&build_path, &sources))
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        .and_then(|result| result);

    let bytes = match built {
        Ok(()) => tokio::fs::read(&archive_path)
            .await
            .map_err(|err| io_error("read archive", &err)),
        Err(err) => Err(err),
    };

    match tokio::fs::remove_file(&archive_path).await {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(path = %archive_path.display(), error = %err, "failed to remove export archive");
        }
    }
    bytes
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn save(&self, file: &UploadedFile) -> ApplicationResult<()> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|err| io_error("create upload directory", &err))?;

        let target = self.upload_dir.join(file.stored_name());
        tokio::fs::write(&target, &file.bytes)
            .await
            .map_err(|err| io_error("save upload", &err))?;

        tracing::debug!(path = %target.display(), size = file.bytes.len(), "upload saved");
        Ok(())
    }

    async fn is_empty(&self) -> ApplicationResult<bool> {
        Ok(self.regular_files().await?.is_empty())
    }

    async fn export_archive(&self, archive_name: &str) -> ApplicationResult<Vec<u8>> {
        let sources = self.regular_files().await?;
        build_archive(self.scratch_dir.join(archive_name), sources).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    #[tokio::test]
    async fn missing_directory_counts_as_empty() {
        let root = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(root.path().join("absent"), root.path());
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn save_uses_base_name_and_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(root.path().join("uploads"), root.path());

        store
            .save(&UploadedFile::new("../x/a.png", "image/png", b"one".to_vec()))
            .await
            .unwrap();
        store
            .save(&UploadedFile::new("a.png", "image/png", b"two".to_vec()))
            .await
            .unwrap();

        let saved = std::fs::read(root.path().join("uploads").join("a.png")).unwrap();
        assert_eq!(saved, b"two");
        assert!(!store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn export_skips_subdirectories_and_removes_archive() {
        let root = tempfile::tempdir().unwrap();
        let uploads = root.path().join("uploads");
        let scratch = root.path().join("scratch");
        std::fs::create_dir_all(uploads.join("nested")).unwrap();
        std::fs::create_dir_all(&scratch).unwrap();
        std::fs::write(uploads.join("b.gif"), b"gif").unwrap();
        std::fs::write(uploads.join("a.png"), b"png").unwrap();
        std::fs::write(uploads.join("nested").join("c.png"), b"skip").unwrap();

        let store = LocalUploadStore::new(&uploads, &scratch);
        let bytes = store.export_archive("ExportedFiles_1.zip").await.unwrap();

        assert!(!scratch.join("ExportedFiles_1.zip").exists());
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut first = String::new();
        archive.by_name("a.png").unwrap().read_to_string(&mut first).unwrap();
        assert_eq!(first, "png");
    }

    #[tokio::test]
    async fn failed_build_leaves_no_scratch_archive() {
        let root = tempfile::tempdir().unwrap();
        let archive = root.path().join("ExportedFiles_2.zip");
        let present = root.path().join("a.png");
        std::fs::write(&present, b"png").unwrap();

        let err = build_archive(
            archive.clone(),
            vec![present, root.path().join("vanished.png")],
        )
        .await
        .unwrap_err();

        assert!(err.message().starts_with("failed to read upload"));
        assert!(!archive.exists());
    }
}
