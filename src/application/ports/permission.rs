use crate::application::{ApplicationResult, permissions::PermissionKey};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PermissionGate: Send + Sync {
    async fn has_permission(&self, user_id: UserId, key: &PermissionKey) -> ApplicationResult<bool>;
}
