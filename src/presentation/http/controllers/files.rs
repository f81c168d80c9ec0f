// src/presentation/http/controllers/files.rs
use crate::application::{
    commands::files::UploadFilesCommand,
    dto::FileDownload,
    error::ApplicationError,
    queries::files::GetArticleFilesQuery,
};
use crate::domain::files::UploadedFile;
use crate::presentation::http::error::{ApiResult, ErrorResponse, ErrorSurface, IntoApiResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{FromRequest, Multipart, Path, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Multipart form accepted by the upload endpoint. Every part carrying a
/// file name is treated as one file.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadForm {
    pub files: Vec<String>,
}

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

async fn read_files(multipart: &mut Multipart) -> Result<Vec<UploadedFile>, ApplicationError> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApplicationError::validation(err.body_text()))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| ApplicationError::validation(err.body_text()))?;
        files.push(UploadedFile::new(file_name, content_type, bytes));
    }
    Ok(files)
}

fn header_safe_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn attachment(download: FileDownload) -> Response {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe_name(&download.file_name)
    );
    (
        [
            (header::CONTENT_TYPE, download.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.bytes,
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/article/upload/{articleId}",
    params(("articleId" = String, Path, description = "Article the files belong to")),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Files stored and registered for the article.", body = String, content_type = "text/plain"),
        (status = 400, description = "Rejected batch; nothing was stored.", body = ErrorResponse),
        (status = 403, description = "Permission denied.", body = ErrorResponse)
    ),
    tag = "Files"
)]
pub async fn upload_files(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<String>,
    request: Request,
) -> ApiResult<String> {
    let envelope = state.error_envelope;
    let commands = &state.services.file_commands;

    // The body is only touched once the caller may upload.
    let permit = commands
        .authorize_upload(&user)
        .await
        .into_api(envelope, ErrorSurface::Upload)?;

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|rejection| ApplicationError::validation(rejection.body_text()))
        .into_api(envelope, ErrorSurface::Upload)?;
    let files = read_files(&mut multipart)
        .await
        .into_api(envelope, ErrorSurface::Upload)?;

    commands
        .upload_files(permit, UploadFilesCommand { article_id, files })
        .await
        .into_api(envelope, ErrorSurface::Upload)
}

#[utoipa::path(
    get,
    path = "/article/file/{articleId}",
    params(("articleId" = String, Path, description = "Article the files belong to")),
    responses(
        (status = 200, description = "ZIP of the latest upload batch, named after its first file.", body = Vec<u8>, content_type = "application/zip"),
        (status = 403, description = "Permission denied.", body = ErrorResponse),
        (status = 404, description = "No files registered for the article.", body = ErrorResponse)
    ),
    tag = "Files"
)]
pub async fn download_article_files(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<String>,
) -> ApiResult<Response> {
    state
        .services
        .file_queries
        .get_article_files(&user, GetArticleFilesQuery { article_id })
        .await
        .into_api(state.error_envelope, ErrorSurface::Download)
        .map(attachment)
}

#[utoipa::path(
    get,
    path = "/article/export",
    responses(
        (status = 200, description = "ZIP of every file in the upload directory.", body = Vec<u8>, content_type = "application/zip"),
        (status = 403, description = "Permission denied.", body = ErrorResponse),
        (status = 404, description = "Upload directory is empty.", body = ErrorResponse)
    ),
    tag = "Files"
)]
pub async fn export_files(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> ApiResult<Response> {
    state
        .services
        .file_queries
        .export_files(&user)
        .await
        .into_api(state.error_envelope, ErrorSurface::Download)
        .map(attachment)
}
