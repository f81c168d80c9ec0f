use std::sync::Arc;

use crate::{
    application::{permissions::PermissionGuard, ports::storage::UploadStore},
    domain::files::FileRegistry,
};

pub struct FileCommandService {
    pub(super) registry: Arc<dyn FileRegistry>,
    pub(super) store: Arc<dyn UploadStore>,
    pub(super) guard: Arc<PermissionGuard>,
}

impl FileCommandService {
    pub fn new(
        registry: Arc<dyn FileRegistry>,
        store: Arc<dyn UploadStore>,
        guard: Arc<PermissionGuard>,
    ) -> Self {
        Self {
            registry,
            store,
            guard,
        }
    }
}
