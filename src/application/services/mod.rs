// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, files::FileCommandService},
        permissions::{ActionPermissions, PermissionGuard},
        ports::{
            archive::BundleArchiver,
            notification::NotificationQueue,
            permission::PermissionGate,
            security::TokenManager,
            storage::UploadStore,
            time::Clock,
        },
        queries::{
            articles::ArticleQueryService, dashboard::DashboardQueryService,
            files::FileQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        files::FileRegistry,
    },
};

/// Every port the application services are wired from. Built once at
/// startup; the registry instance it carries lives as long as the services.
pub struct ServiceDependencies {
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub file_registry: Arc<dyn FileRegistry>,
    pub upload_store: Arc<dyn UploadStore>,
    pub archiver: Arc<dyn BundleArchiver>,
    pub permission_gate: Arc<dyn PermissionGate>,
    pub permissions: ActionPermissions,
    pub notifications: Arc<dyn NotificationQueue>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub file_commands: Arc<FileCommandService>,
    pub file_queries: Arc<FileQueryService>,
    pub dashboard: Arc<DashboardQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let guard = Arc::new(PermissionGuard::new(
            Arc::clone(&deps.permission_gate),
            deps.permissions,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&deps.article_write_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&guard),
            Arc::clone(&deps.notifications),
            Arc::clone(&deps.clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&guard),
        ));

        let file_commands = Arc::new(FileCommandService::new(
            Arc::clone(&deps.file_registry),
            Arc::clone(&deps.upload_store),
            Arc::clone(&guard),
        ));

        let file_queries = Arc::new(FileQueryService::new(
            Arc::clone(&deps.file_registry),
            Arc::clone(&deps.upload_store),
            Arc::clone(&deps.archiver),
            Arc::clone(&guard),
            Arc::clone(&deps.clock),
        ));

        let dashboard = Arc::new(DashboardQueryService::new(
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&guard),
        ));

        Self {
            article_commands,
            article_queries,
            file_commands,
            file_queries,
            dashboard,
            token_manager: deps.token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
