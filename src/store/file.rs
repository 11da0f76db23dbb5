//! File-backed project store
//!
//! One pretty-printed JSON document per project, named `{id}.json`, under a
//! data directory (default `~/.local/share/project-forge/projects` via the
//! platform data dir). Writes go through a temp file + rename so a crash
//! mid-write never leaves a truncated document.

use super::traits::ProjectStore;
use crate::project::Project;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON-file implementation of [`ProjectStore`].
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create store directory {}", root.display()))?;
        Ok(Self { root })
    }

    /// Default on-disk location: `<platform data dir>/project-forge/projects`.
    pub fn default_root() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("project-forge")
            .join("projects")
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    fn read_document(path: &Path) -> Result<Project> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[async_trait]
impl ProjectStore for JsonFileStore {
    async fn get(&self, id: Uuid) -> Result<Option<Project>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(Self::read_document(&path)?))
    }

    async fn put(&self, project: &Project) -> Result<()> {
        let path = self.path_for(project.id);
        let json = serde_json::to_string_pretty(project).context("Failed to serialize project")?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to move {} into place", tmp.display()))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to delete {}", path.display()))?;
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read {}", self.root.display()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // A single corrupt document should not hide the rest
            match Self::read_document(&path) {
                Ok(project) => projects.push(project),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable project document");
                }
            }
        }

        projects.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(projects)
    }
}
