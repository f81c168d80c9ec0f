// src/presentation/http/openapi.rs
use crate::application::dto::{
    ApprovalBar, ArticleDto, ChartPoint, DashboardDto, MessageDto,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub data: ArticleDto,
}

/// `data` is `null` when the article does not exist.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OptionalArticleResponse {
    pub data: Option<ArticleDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub data: Vec<ArticleDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteArticleResponse {
    pub data: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::list_articles_by_user,
        crate::presentation::http::controllers::articles::list_articles_by_department,
        crate::presentation::http::controllers::articles::approve_article,
        crate::presentation::http::controllers::files::upload_files,
        crate::presentation::http::controllers::files::download_article_files,
        crate::presentation::http::controllers::files::export_files,
        crate::presentation::http::controllers::dashboard::get_dashboard_data,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleResponse,
            OptionalArticleResponse,
            ArticleListResponse,
            DeleteArticleResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::files::UploadForm,
            ArticleDto,
            MessageDto,
            DashboardDto,
            ChartPoint,
            ApprovalBar
        )
    ),
    tags(
        (name = "Articles", description = "Article submission and review"),
        (name = "Files", description = "Article file upload, download and export"),
        (name = "Dashboard", description = "Aggregate statistics"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Article Desk API",
        description = "Article submission and review backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

fn public_urls() -> Vec<String> {
    let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
        .ok()
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches('/').to_string())
                .collect()
        })
        .unwrap_or_default();

    if !urls.iter().any(|url| url == "http://localhost:8080") {
        urls.push("http://localhost:8080".to_string());
    }

    let mut seen = HashSet::new();
    urls.retain(|url| seen.insert(url.clone()));
    urls
}

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        servers.extend(public_urls().into_iter().map(Server::new));
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at
/// `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    tracing::info!(path = %path.display(), "openapi snapshot written");
    Ok(())
}
