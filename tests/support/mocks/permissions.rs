// tests/support/mocks/permissions.rs
use article_desk::application::{
    ApplicationResult, permissions::PermissionKey, ports::permission::PermissionGate,
};
use article_desk::domain::user::UserId;
use async_trait::async_trait;
use std::{collections::HashSet, sync::Mutex};

#[derive(Debug, Default)]
pub struct AllowAllGate;

#[async_trait]
impl PermissionGate for AllowAllGate {
    async fn has_permission(&self, _user_id: UserId, _key: &PermissionKey) -> ApplicationResult<bool> {
        Ok(true)
    }
}

#[derive(Debug, Default)]
pub struct DenyAllGate;

#[async_trait]
impl PermissionGate for DenyAllGate {
    async fn has_permission(&self, _user_id: UserId, _key: &PermissionKey) -> ApplicationResult<bool> {
        Ok(false)
    }
}

/// Grants only the listed keys and records every key it was asked about.
#[derive(Debug, Default)]
pub struct KeyedGate {
    granted: HashSet<String>,
    checked: Mutex<Vec<String>>,
}

impl KeyedGate {
    pub fn granting<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: keys.into_iter().map(Into::into).collect(),
            checked: Mutex::new(Vec::new()),
        }
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait]
impl PermissionGate for KeyedGate {
    async fn has_permission(&self, _user_id: UserId, key: &PermissionKey) -> ApplicationResult<bool> {
        self.checked.lock().unwrap().push(key.as_str().to_string());
        Ok(self.granted.contains(key.as_str()))
    }
}
