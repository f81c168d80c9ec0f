// src/application/commands/files/upload.rs
use super::FileCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        permissions::ArticleAction,
    },
    domain::{
        files::{ArticleFileKey, UploadedFile, is_allowed_content_type},
        user::UserId,
    },
};

/// Issued by [`FileCommandService::authorize_upload`]; an upload cannot run
/// without one, so the permission check always precedes reading the files.
#[derive(Debug)]
pub struct UploadPermit {
    user_id: UserId,
}

pub struct UploadFilesCommand {
    pub article_id: String,
    pub files: Vec<UploadedFile>,
}

pub fn upload_success_message(key: &ArticleFileKey) -> String {
    format!("Files uploaded successfully for ArticleId: {key}")
}

fn validate_batch(files: &[UploadedFile]) -> ApplicationResult<()> {
    if files.is_empty() {
        return Err(ApplicationError::validation("No files selected"));
    }

    // The first offending file decides the error message.
    for file in files {
        if file.is_empty() || file.stored_name().is_empty() {
            return Err(ApplicationError::validation("File not selected"));
        }
        if !is_allowed_content_type(&file.content_type) {
            return Err(ApplicationError::validation(format!(
                "Invalid file format for file {}. Only docx, jpeg, png, or gif files are allowed.",
                file.file_name
            )));
        }
    }
    Ok(())
}

impl FileCommandService {
    pub async fn authorize_upload(&self, actor: &AuthenticatedUser) -> ApplicationResult<UploadPermit> {
        self.guard.ensure(actor, ArticleAction::Upload).await?;
        Ok(UploadPermit { user_id: actor.id })
    }

    /// Stores a batch of files for an article and makes it the article's
    /// downloadable bundle. The batch is validated as a whole first: a
    /// rejected call writes nothing to disk and leaves the previous bundle
    /// registered.
    pub async fn upload_files(
        &self,
        permit: UploadPermit,
        command: UploadFilesCommand,
    ) -> ApplicationResult<String> {
        let key = ArticleFileKey::new(command.article_id)?;
        validate_batch(&command.files)?;

        for file in &command.files {
            self.store.save(file).await?;
        }

        let count = command.files.len();
        self.registry.replace(&key, command.files).await?;
        tracing::info!(article_id = %key, files = count, user_id = %permit.user_id, "article files uploaded");

        Ok(upload_success_message(&key))
    }
}
