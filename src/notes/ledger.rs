//! Note ledger — append-only categorized record of project activity

use super::models::{NoteCategory, ProjectNote};
use crate::project::Project;
use crate::store::ProjectStore;
use std::sync::Arc;
use uuid::Uuid;

/// Manager for the note ledger of a project.
///
/// Notes are inserted at the head of the sequence (reverse-chronological
/// display/storage invariant) and are immutable once created. Every change
/// is persisted through the store; persistence failures are logged and never
/// surfaced — the in-memory ledger is already updated and a later write will
/// catch up.
pub struct NoteLedger {
    store: Arc<dyn ProjectStore>,
}

impl NoteLedger {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// Append a note at the head of the ledger.
    ///
    /// Empty or whitespace-only content is rejected as a no-op (`None`) —
    /// no timestamp is assigned and nothing is persisted.
    pub async fn append(
        &self,
        project: &mut Project,
        content: &str,
        category: NoteCategory,
    ) -> Option<ProjectNote> {
        if content.trim().is_empty() {
            return None;
        }

        let note = ProjectNote::new(content, category);
        project.notes.insert(0, note.clone());
        tracing::debug!(project_id = %project.id, category = %category, "Appended note");

        self.persist(project).await;
        Some(note)
    }

    /// Remove a note by id, preserving the order of the remaining notes.
    /// Returns `true` if the note existed.
    pub async fn remove(&self, project: &mut Project, id: Uuid) -> bool {
        let before = project.notes.len();
        project.notes.retain(|n| n.id != id);
        let removed = project.notes.len() < before;

        if removed {
            self.persist(project).await;
        }
        removed
    }

    /// Read view over the ledger: notes of `category`, or all notes for
    /// `None`, in ledger order.
    pub fn filter(project: &Project, category: Option<NoteCategory>) -> Vec<&ProjectNote> {
        project
            .notes
            .iter()
            .filter(|n| category.map_or(true, |c| n.category == c))
            .collect()
    }

    async fn persist(&self, project: &Project) {
        if let Err(e) = self.store.put(project).await {
            tracing::warn!(
                project_id = %project.id,
                error = %e,
                "Failed to persist project after ledger change"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn ledger_with_store() -> (Arc<MemoryStore>, NoteLedger) {
        let store = Arc::new(MemoryStore::new());
        let ledger = NoteLedger::new(store.clone());
        (store, ledger)
    }

    #[tokio::test]
    async fn test_append_inserts_at_head() {
        let (_store, ledger) = ledger_with_store();
        let mut project = Project::new("P", "");

        ledger
            .append(&mut project, "first idea", NoteCategory::Idea)
            .await
            .unwrap();
        ledger
            .append(&mut project, "built the frame", NoteCategory::Log)
            .await
            .unwrap();

        // Head-insertion: the Log note is index 0, the Idea note index 1
        assert_eq!(project.notes.len(), 2);
        assert_eq!(project.notes[0].category, NoteCategory::Log);
        assert_eq!(project.notes[1].category, NoteCategory::Idea);
    }

    #[tokio::test]
    async fn test_append_rejects_empty_content() {
        let (store, ledger) = ledger_with_store();
        let mut project = Project::new("P", "");

        assert!(ledger
            .append(&mut project, "", NoteCategory::General)
            .await
            .is_none());
        assert!(ledger
            .append(&mut project, "   \n\t", NoteCategory::Log)
            .await
            .is_none());

        assert!(project.notes.is_empty());
        // Nothing was persisted either
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_append_persists_project() {
        let (store, ledger) = ledger_with_store();
        let mut project = Project::new("P", "");

        ledger
            .append(&mut project, "note", NoteCategory::General)
            .await
            .unwrap();

        let stored = store.get(project.id).await.unwrap().unwrap();
        assert_eq!(stored.notes.len(), 1);
        assert_eq!(stored.notes[0].content, "note");
    }

    #[tokio::test]
    async fn test_filter_by_category_preserves_order() {
        let (_store, ledger) = ledger_with_store();
        let mut project = Project::new("P", "");

        ledger
            .append(&mut project, "r1", NoteCategory::Research)
            .await
            .unwrap();
        ledger
            .append(&mut project, "p1", NoteCategory::Plan)
            .await
            .unwrap();
        ledger
            .append(&mut project, "r2", NoteCategory::Research)
            .await
            .unwrap();

        let research = NoteLedger::filter(&project, Some(NoteCategory::Research));
        assert_eq!(research.len(), 2);
        // Same relative order as the full ledger (newest first)
        assert_eq!(research[0].content, "r2");
        assert_eq!(research[1].content, "r1");

        let all = NoteLedger::filter(&project, None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].content, "r2");
        assert_eq!(all[2].content, "r1");

        assert!(NoteLedger::filter(&project, Some(NoteCategory::Log)).is_empty());
    }

    #[tokio::test]
    async fn test_remove_preserves_remaining_order() {
        let (_store, ledger) = ledger_with_store();
        let mut project = Project::new("P", "");

        ledger
            .append(&mut project, "a", NoteCategory::General)
            .await
            .unwrap();
        let middle = ledger
            .append(&mut project, "b", NoteCategory::General)
            .await
            .unwrap();
        ledger
            .append(&mut project, "c", NoteCategory::General)
            .await
            .unwrap();

        assert!(ledger.remove(&mut project, middle.id).await);
        let contents: Vec<&str> = project.notes.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["c", "a"]);

        // Removing a missing id is a no-op
        assert!(!ledger.remove(&mut project, Uuid::new_v4()).await);
        assert_eq!(project.notes.len(), 2);
    }
}
