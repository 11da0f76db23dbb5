//! ProjectStore trait definition

use crate::project::Project;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Abstract key→document store for projects.
///
/// The project id is the key; the value is the whole serialized `Project`
/// (including its nested notes and whiteboard). Implementations must be
/// thread-safe (`Send + Sync`) for `Arc<dyn ProjectStore>` usage.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetch a project by id. `Ok(None)` if the key is absent.
    async fn get(&self, id: Uuid) -> Result<Option<Project>>;

    /// Write (insert or replace) a project document.
    async fn put(&self, project: &Project) -> Result<()>;

    /// Delete a project. Returns `true` if the key existed.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// All stored projects, sorted by title for stable display order.
    async fn list(&self) -> Result<Vec<Project>>;
}
