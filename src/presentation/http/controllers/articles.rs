// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ApproveArticleCommand, CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
    },
    dto::MessageDto,
    queries::articles::{
        GetArticleByIdQuery, ListArticlesByDepartmentQuery, ListArticlesByUserQuery,
    },
};
use crate::presentation::http::error::{
    ApiResult, ErrorResponse, ErrorSurface, IntoApiResult,
};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::{
    ArticleListResponse, ArticleResponse, DeleteArticleResponse, OptionalArticleResponse,
};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub department_id: i64,
    /// Author id. Defaults to the caller.
    #[serde(default)]
    pub user_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_topic: bool,
    /// Accepted for compatibility and ignored: submissions start unapproved.
    #[serde(default)]
    pub is_approved: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    /// Ignored; the path id wins.
    #[serde(default)]
    pub id: Option<i64>,
    pub department_id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_topic: bool,
}

#[utoipa::path(
    get,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article, or `data: null` when it does not exist.", body = OptionalArticleResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Permission denied.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> ApiResult<Json<OptionalArticleResponse>> {
    let data = state
        .services
        .article_queries
        .get_article_by_id(&user, GetArticleByIdQuery { id })
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)?;

    Ok(Json(OptionalArticleResponse { data }))
}

#[utoipa::path(
    post,
    path = "/article",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Article submitted.", body = ArticleResponse),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Permission denied.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> ApiResult<Json<ArticleResponse>> {
    if payload.is_approved {
        tracing::debug!(user_id = %user.id, "ignoring isApproved on submission");
    }

    let command = CreateArticleCommand {
        department_id: payload.department_id,
        user_id: payload.user_id,
        title: payload.title,
        content: payload.content,
        is_topic: payload.is_topic,
    };

    let data = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)?;

    Ok(Json(ArticleResponse { data }))
}

#[utoipa::path(
    put,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article replaced.", body = ArticleResponse),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 403, description = "Permission denied.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> ApiResult<Json<ArticleResponse>> {
    if let Some(body_id) = payload.id.filter(|body_id| *body_id != id) {
        tracing::debug!(path_id = id, body_id, "ignoring mismatched body id");
    }

    let command = UpdateArticleCommand {
        id,
        department_id: payload.department_id,
        user_id: payload.user_id,
        title: payload.title,
        content: payload.content,
        is_approved: payload.is_approved,
        is_topic: payload.is_topic,
    };

    let data = state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)?;

    Ok(Json(ArticleResponse { data }))
}

#[utoipa::path(
    delete,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Whether an article was removed.", body = DeleteArticleResponse),
        (status = 403, description = "Permission denied.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteArticleResponse>> {
    let data = state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)?;

    Ok(Json(DeleteArticleResponse { data }))
}

#[utoipa::path(
    get,
    path = "/article/list",
    responses(
        (status = 200, description = "Every article.", body = ArticleListResponse),
        (status = 403, description = "Permission denied.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> ApiResult<Json<ArticleListResponse>> {
    let data = state
        .services
        .article_queries
        .list_articles(&user)
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)?;

    Ok(Json(ArticleListResponse { data }))
}

#[utoipa::path(
    get,
    path = "/article/get-by-user/{userId}",
    params(("userId" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "Articles written by the user.", body = ArticleListResponse),
        (status = 403, description = "Permission denied.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles_by_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<ArticleListResponse>> {
    let data = state
        .services
        .article_queries
        .list_articles_by_user(&user, ListArticlesByUserQuery { user_id })
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)?;

    Ok(Json(ArticleListResponse { data }))
}

#[utoipa::path(
    get,
    path = "/article/get-by-department/{departmentId}",
    params(("departmentId" = i64, Path, description = "Department id")),
    responses(
        (status = 200, description = "Articles submitted to the department.", body = ArticleListResponse),
        (status = 403, description = "Permission denied.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles_by_department(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(department_id): Path<i64>,
) -> ApiResult<Json<ArticleListResponse>> {
    let data = state
        .services
        .article_queries
        .list_articles_by_department(&user, ListArticlesByDepartmentQuery { department_id })
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)?;

    Ok(Json(ArticleListResponse { data }))
}

#[utoipa::path(
    put,
    path = "/article/approve/{articleId}",
    params(("articleId" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article approved.", body = MessageDto),
        (status = 403, description = "Permission denied.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageDto>> {
    state
        .services
        .article_commands
        .approve_article(&user, ApproveArticleCommand { id })
        .await
        .into_api(state.error_envelope, ErrorSurface::Json)
        .map(Json)
}
