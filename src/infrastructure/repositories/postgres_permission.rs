use super::map_sqlx;
use crate::application::{
    ApplicationResult, permissions::PermissionKey, ports::permission::PermissionGate,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

/// Grants a permission when the user's role lists it in `role_permissions`.
#[derive(Clone)]
pub struct PostgresPermissionGate {
    pool: PgPool,
}

impl PostgresPermissionGate {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionGate for PostgresPermissionGate {
    async fn has_permission(&self, user_id: UserId, key: &PermissionKey) -> ApplicationResult<bool> {
        let granted: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1
                 FROM users u
                 JOIN role_permissions rp ON rp.role_id = u.role_id
                 JOIN permissions p ON p.id = rp.permission_id
                 WHERE u.id = $1 AND p.name = $2
             )",
        )
        .bind(i64::from(user_id))
        .bind(key.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(granted)
    }
}
