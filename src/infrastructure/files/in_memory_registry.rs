// src/infrastructure/files/in_memory_registry.rs
use crate::domain::{
    errors::DomainResult,
    files::{ArticleFileKey, FileBundle, FileRegistry, UploadedFile},
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Process-lifetime registry of the latest upload batch per article.
/// Entries are swapped whole, so a reader holds either the previous bundle
/// or the new one.
#[derive(Default)]
pub struct InMemoryFileRegistry {
    bundles: RwLock<HashMap<String, Arc<FileBundle>>>,
}

impl InMemoryFileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.bundles.read().await.len()
    }
}

#[async_trait]
impl FileRegistry for InMemoryFileRegistry {
    async fn replace(&self, key: &ArticleFileKey, files: Vec<UploadedFile>) -> DomainResult<()> {
        let bundle = Arc::new(FileBundle::new(files));
        let mut guard = self.bundles.write().await;
        guard.insert(key.as_str().to_string(), bundle);
        Ok(())
    }

    async fn get(&self, key: &ArticleFileKey) -> DomainResult<Option<Arc<FileBundle>>> {
        let guard = self.bundles.read().await;
        Ok(guard.get(key.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadedFile {
        UploadedFile::new(name, "image/png", name.as_bytes().to_vec())
    }

    #[tokio::test]
    async fn replace_overwrites_previous_batch() {
        let registry = InMemoryFileRegistry::new();
        let key = ArticleFileKey::new("7").unwrap();

        registry
            .replace(&key, vec![file("a.png"), file("b.png")])
            .await
            .unwrap();
        registry.replace(&key, vec![file("c.png")]).await.unwrap();

        let bundle = registry.get(&key).await.unwrap().unwrap();
        let names: Vec<_> = bundle.files().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["c.png"]);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn readers_keep_the_bundle_they_fetched() {
        let registry = InMemoryFileRegistry::new();
        let key = ArticleFileKey::new("7").unwrap();
        registry.replace(&key, vec![file("old.png")]).await.unwrap();

        let before = registry.get(&key).await.unwrap().unwrap();
        registry.replace(&key, vec![file("new.png")]).await.unwrap();

        assert_eq!(before.files()[0].file_name, "old.png");
        assert_eq!(
            registry.get(&key).await.unwrap().unwrap().files()[0].file_name,
            "new.png"
        );
    }

    #[tokio::test]
    async fn unknown_key_is_none() {
        let registry = InMemoryFileRegistry::new();
        let key = ArticleFileKey::new("missing").unwrap();
        assert!(registry.get(&key).await.unwrap().is_none());
    }
}
