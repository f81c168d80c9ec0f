use std::sync::Arc;

use crate::{
    application::{
        permissions::PermissionGuard,
        ports::{archive::BundleArchiver, storage::UploadStore, time::Clock},
    },
    domain::files::FileRegistry,
};

pub struct FileQueryService {
    pub(super) registry: Arc<dyn FileRegistry>,
    pub(super) store: Arc<dyn UploadStore>,
    pub(super) archiver: Arc<dyn BundleArchiver>,
    pub(super) guard: Arc<PermissionGuard>,
    pub(super) clock: Arc<dyn Clock>,
}

impl FileQueryService {
    pub fn new(
        registry: Arc<dyn FileRegistry>,
        store: Arc<dyn UploadStore>,
        archiver: Arc<dyn BundleArchiver>,
        guard: Arc<PermissionGuard>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            store,
            archiver,
            guard,
            clock,
        }
    }
}
