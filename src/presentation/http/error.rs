// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
                DomainError::Persistence(msg) | DomainError::Storage(msg) => {
                    Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
            },
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP reason phrase, e.g. `Not Found`.
    pub error: String,
    pub message: String,
}

/// Wire shape used for failures of article endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorEnvelope {
    /// Status code per error kind with an [`ErrorResponse`] body.
    #[default]
    Standard,
    /// Shape older clients parse: `200 { error }` for failures, a bare 403,
    /// plain-text 404 and 400 responses.
    Legacy,
}

impl ErrorEnvelope {
    pub const fn from_legacy_flag(legacy: bool) -> Self {
        if legacy { Self::Legacy } else { Self::Standard }
    }
}

/// Which endpoint family produced the failure; legacy rendering differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSurface {
    Json,
    Upload,
    Download,
}

#[derive(Debug)]
pub struct ApiError {
    envelope: ErrorEnvelope,
    surface: ErrorSurface,
    error: ApplicationError,
}

impl ApiError {
    pub const fn new(envelope: ErrorEnvelope, surface: ErrorSurface, error: ApplicationError) -> Self {
        Self {
            envelope,
            surface,
            error,
        }
    }
}

fn is_not_found(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_))
    )
}

fn is_validation(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_))
    )
}

fn render_legacy(surface: ErrorSurface, err: ApplicationError) -> Response {
    match err {
        ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN.into_response(),
        ApplicationError::Unauthorized(_) => HttpError::from_error(err).into_response(),
        err if is_not_found(&err) => (StatusCode::NOT_FOUND, err.message()).into_response(),
        err => match surface {
            ErrorSurface::Json => {
                tracing::warn!(error = %err, "request failed (legacy envelope)");
                (StatusCode::OK, Json(json!({ "error": err.message() }))).into_response()
            }
            ErrorSurface::Upload if is_validation(&err) => {
                (StatusCode::BAD_REQUEST, err.message()).into_response()
            }
            ErrorSurface::Upload => {
                tracing::error!(error = %err, "upload failed");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to upload files: {}", err.message()),
                )
                    .into_response()
            }
            ErrorSurface::Download => (StatusCode::BAD_REQUEST, err.message()).into_response(),
        },
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.envelope {
            ErrorEnvelope::Standard => HttpError::from_error(self.error).into_response(),
            ErrorEnvelope::Legacy => render_legacy(self.surface, self.error),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub trait IntoApiResult<T> {
    fn into_api(self, envelope: ErrorEnvelope, surface: ErrorSurface) -> ApiResult<T>;
}

impl<T> IntoApiResult<T> for ApplicationResult<T> {
    fn into_api(self, envelope: ErrorEnvelope, surface: ErrorSurface) -> ApiResult<T> {
        self.map_err(|err| ApiError::new(envelope, surface, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body;

    async fn body_text(response: Response) -> String {
        let bytes = body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn domain_errors_keep_their_status() {
        let err = ApplicationError::from(DomainError::NotFound("gone".into()));
        assert_eq!(HttpError::from_error(err).status(), StatusCode::NOT_FOUND);
        let err = ApplicationError::from(DomainError::Persistence("db".into()));
        assert_eq!(
            HttpError::from_error(err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn legacy_json_failure_is_ok_with_error_field() {
        let response = ApiError::new(
            ErrorEnvelope::Legacy,
            ErrorSurface::Json,
            ApplicationError::infrastructure("db down"),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "db down");
    }

    #[tokio::test]
    async fn legacy_forbidden_has_no_body() {
        let response = ApiError::new(
            ErrorEnvelope::Legacy,
            ErrorSurface::Json,
            ApplicationError::forbidden("missing permission list for get"),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn legacy_upload_failure_is_prefixed() {
        let response = ApiError::new(
            ErrorEnvelope::Legacy,
            ErrorSurface::Upload,
            ApplicationError::infrastructure("disk full"),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Failed to upload files: disk full");
    }

    #[tokio::test]
    async fn standard_envelope_uses_error_response() {
        let response = ApiError::new(
            ErrorEnvelope::Standard,
            ErrorSurface::Download,
            ApplicationError::not_found("No file found for the specified ArticleId"),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "No file found for the specified ArticleId");
    }
}
