// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, dashboard, files},
    middleware::rate_limit::{RateLimitSettings, rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Permissive CORS, default limiter when `enable_rate_limiter` is set.
pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limiter: bool) -> Router {
    let limiter = enable_rate_limiter.then(RateLimitSettings::default);
    build_router_with_options(state, &[], limiter)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// `allowed_origins` empty means any origin. `rate_limit` `None` disables the
/// limiter.
pub fn build_router_with_options(
    state: HttpState,
    allowed_origins: &[String],
    rate_limit: Option<RateLimitSettings>,
) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    let article_routes = Router::new()
        .route("/article", post(articles::create_article))
        .route("/article/list", get(articles::list_articles))
        .route("/article/export", get(files::export_files))
        .route(
            "/article/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/article/get-by-user/{userId}",
            get(articles::list_articles_by_user),
        )
        .route(
            "/article/get-by-department/{departmentId}",
            get(articles::list_articles_by_department),
        )
        .route("/article/approve/{articleId}", put(articles::approve_article))
        .route(
            "/article/upload/{articleId}",
            post(files::upload_files).layer(upload_limit),
        )
        .route("/article/file/{articleId}", get(files::download_article_files))
        .route("/dashboard/get-data", post(dashboard::get_dashboard_data));

    let article_routes = match rate_limit.and_then(rate_limit_layer) {
        Some(layer) => article_routes.layer(layer),
        None => article_routes,
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(article_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    security(()),
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
