use std::sync::Arc;

use crate::{application::permissions::PermissionGuard, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) guard: Arc<PermissionGuard>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, guard: Arc<PermissionGuard>) -> Self {
        Self { read_repo, guard }
    }
}
