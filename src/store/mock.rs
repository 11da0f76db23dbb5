//! In-memory project store for tests

use super::traits::ProjectStore;
use crate::project::Project;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory implementation of [`ProjectStore`].
///
/// No I/O and no persistence across instances — the test double for the
/// file-backed store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<Uuid, Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects (test convenience).
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<Project>> {
        Ok(self.inner.read().unwrap().get(&id).cloned())
    }

    async fn put(&self, project: &Project) -> Result<()> {
        self.inner
            .write()
            .unwrap()
            .insert(project.id, project.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.inner.write().unwrap().remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self.inner.read().unwrap().values().cloned().collect();
        projects.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(projects)
    }
}
