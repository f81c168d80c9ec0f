// src/application/permissions.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::permission::PermissionGate,
};
use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

/// Permission every article action requires unless configured otherwise.
pub const DEFAULT_PERMISSION_KEY: &str = "list";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermissionKey(String);

impl PermissionKey {
    pub fn new(value: impl Into<String>) -> ApplicationResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ApplicationError::validation("permission key cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleAction {
    Get,
    Create,
    Update,
    Delete,
    List,
    ListByUser,
    ListByDepartment,
    Approve,
    Upload,
    Download,
    Export,
    Dashboard,
}

impl ArticleAction {
    pub const ALL: [Self; 12] = [
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::List,
        Self::ListByUser,
        Self::ListByDepartment,
        Self::Approve,
        Self::Upload,
        Self::Download,
        Self::Export,
        Self::Dashboard,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
            Self::ListByUser => "list_by_user",
            Self::ListByDepartment => "list_by_department",
            Self::Approve => "approve",
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Export => "export",
            Self::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for ArticleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleAction {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ApplicationError::validation(format!("unknown article action '{s}'")))
    }
}

/// Which permission each action demands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPermissions {
    table: HashMap<ArticleAction, PermissionKey>,
}

impl Default for ActionPermissions {
    fn default() -> Self {
        let key = PermissionKey(DEFAULT_PERMISSION_KEY.to_string());
        Self::uniform(key)
    }
}

impl ActionPermissions {
    pub fn uniform(key: PermissionKey) -> Self {
        let table = ArticleAction::ALL
            .into_iter()
            .map(|action| (action, key.clone()))
            .collect();
        Self { table }
    }

    pub fn with(mut self, action: ArticleAction, key: PermissionKey) -> Self {
        self.table.insert(action, key);
        self
    }

    /// Parses `action=key` pairs separated by commas on top of the default
    /// table, e.g. `approve=article.approve,export=file.export`.
    pub fn parse_overrides(spec: &str) -> ApplicationResult<Self> {
        let mut permissions = Self::default();
        for pair in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (action, key) = pair.split_once('=').ok_or_else(|| {
                ApplicationError::validation(format!(
                    "permission override '{pair}' must look like action=key"
                ))
            })?;
            let action: ArticleAction = action.trim().parse()?;
            permissions = permissions.with(action, PermissionKey::new(key)?);
        }
        Ok(permissions)
    }

    pub fn key_for(&self, action: ArticleAction) -> &PermissionKey {
        // every action is inserted at construction and never removed
        &self.table[&action]
    }
}

/// Runs the permission gate for an action before any other work happens.
pub struct PermissionGuard {
    gate: Arc<dyn PermissionGate>,
    permissions: ActionPermissions,
}

impl PermissionGuard {
    pub fn new(gate: Arc<dyn PermissionGate>, permissions: ActionPermissions) -> Self {
        Self { gate, permissions }
    }

    pub async fn ensure(
        &self,
        actor: &AuthenticatedUser,
        action: ArticleAction,
    ) -> ApplicationResult<()> {
        let key = self.permissions.key_for(action);
        if self.gate.has_permission(actor.id, key).await? {
            Ok(())
        } else {
            tracing::debug!(user_id = %actor.id, %action, permission = %key, "permission denied");
            Err(ApplicationError::forbidden(format!(
                "missing permission {key} for {action}"
            )))
        }
    }
}
