// tests/support/helpers.rs
use super::mocks::{AllowAllGate, DummyTokenManager, FixedClock, InMemoryArticleRepo, RecordingQueue};
use article_desk::application::{
    permissions::ActionPermissions,
    ports::{notification::NotificationQueue, permission::PermissionGate},
    services::{ApplicationServices, ServiceDependencies},
};
use article_desk::domain::{
    article::Article,
    files::{ArticleFileKey, FileBundle, FileRegistry},
};
use article_desk::infrastructure::{
    files::InMemoryFileRegistry,
    storage::{LocalUploadStore, ZipBundleArchiver},
};
use article_desk::presentation::http::{
    error::ErrorEnvelope, routes::build_router_with_rate_limiter, state::HttpState,
};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use serde_json::Value;
use std::{
    io::{Cursor, Read},
    path::PathBuf,
    sync::Arc,
};
use tempfile::TempDir;
use tower::ServiceExt as _;
use zip::ZipArchive;

pub const MULTIPART_BOUNDARY: &str = "article-desk-test-boundary";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A router wired to in-memory collaborators and a temporary upload
/// directory, plus handles to inspect them.
pub struct TestApp {
    pub router: Router,
    pub articles: Arc<InMemoryArticleRepo>,
    pub registry: Arc<InMemoryFileRegistry>,
    pub queue: Arc<RecordingQueue>,
    pub root: TempDir,
}

pub struct TestAppBuilder {
    articles: Vec<Article>,
    gate: Arc<dyn PermissionGate>,
    permissions: ActionPermissions,
    queue: Arc<RecordingQueue>,
    envelope: ErrorEnvelope,
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder {
            articles: Vec::new(),
            gate: Arc::new(AllowAllGate),
            permissions: ActionPermissions::default(),
            queue: Arc::new(RecordingQueue::default()),
            envelope: ErrorEnvelope::Standard,
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.root.path().join("uploads")
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.root.path().join("scratch")
    }

    pub async fn registered(&self, article_id: &str) -> Option<Arc<FileBundle>> {
        let key = ArticleFileKey::new(article_id).unwrap();
        self.registry.get(&key).await.unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

impl TestAppBuilder {
    pub fn articles(mut self, articles: impl IntoIterator<Item = Article>) -> Self {
        self.articles = articles.into_iter().collect();
        self
    }

    pub fn gate(mut self, gate: Arc<dyn PermissionGate>) -> Self {
        self.gate = gate;
        self
    }

    pub fn permissions(mut self, permissions: ActionPermissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn queue(mut self, queue: Arc<RecordingQueue>) -> Self {
        self.queue = queue;
        self
    }

    pub fn legacy_envelope(mut self) -> Self {
        self.envelope = ErrorEnvelope::Legacy;
        self
    }

    pub fn build(self) -> TestApp {
        let root = tempfile::tempdir().expect("tempdir");
        let scratch = root.path().join("scratch");
        std::fs::create_dir_all(&scratch).expect("scratch dir");

        let articles = Arc::new(InMemoryArticleRepo::with_articles(self.articles));
        let registry = Arc::new(InMemoryFileRegistry::new());
        let store = LocalUploadStore::new(root.path().join("uploads"), scratch);
        let notifications: Arc<dyn NotificationQueue> = self.queue.clone();

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            article_write_repo: articles.clone(),
            article_read_repo: articles.clone(),
            file_registry: registry.clone(),
            upload_store: Arc::new(store),
            archiver: Arc::new(ZipBundleArchiver),
            permission_gate: self.gate,
            permissions: self.permissions,
            notifications,
            token_manager: Arc::new(DummyTokenManager),
            clock: Arc::new(FixedClock),
        }));

        let state = HttpState::new(services).with_error_envelope(self.envelope);
        TestApp {
            router: build_router_with_rate_limiter(state, false),
            articles,
            registry,
            queue: self.queue,
            root,
        }
    }
}

pub fn authed(method: Method, uri: &str, token: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
}

pub fn json_request(method: Method, uri: &str, token: &str, body: &Value) -> Request<Body> {
    authed(method, uri, token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: &str) -> Request<Body> {
    authed(method, uri, token).body(Body::empty()).unwrap()
}

/// One file part of the `files` form field.
pub struct FilePart {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

pub fn part(name: &str, content_type: &str, bytes: &[u8]) -> FilePart {
    FilePart {
        name: name.to_string(),
        content_type: content_type.to_string(),
        bytes: bytes.to_vec(),
    }
}

pub fn multipart_request(uri: &str, token: &str, parts: &[FilePart]) -> Request<Body> {
    let mut body = Vec::new();
    for FilePart {
        name,
        content_type,
        bytes,
    } in parts
    {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    authed(Method::POST, uri, token)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 16 * 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_json(resp: Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).expect("json body")
}

pub async fn body_text(resp: Response) -> String {
    String::from_utf8(body_bytes(resp).await).expect("utf-8 body")
}

/// `(name, bytes)` for every entry, in archive order.
pub fn zip_entries(bytes: Vec<u8>) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    (0..archive.len())
        .map(|index| {
            let mut entry = archive.by_index(index).expect("zip entry");
            let mut content = Vec::new();
            entry.read_to_end(&mut content).expect("zip content");
            (entry.name().to_string(), content)
        })
        .collect()
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status
/// and reason phrase.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
}
