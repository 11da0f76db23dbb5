//! Agent dispatcher — context assembly and role routing

use super::persona::{persona, AgentRole};
use crate::gemini::{GenerationRequest, HistoryTurn, TextGenerator};
use crate::notes::NoteLedger;
use crate::project::Project;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How many of the most recent notes are included in the assembled context.
/// Bounds the prompt size regardless of ledger length.
pub const MAX_CONTEXT_NOTES: usize = 3;

/// One dispatch, fully assembled. Ephemeral — never persisted.
#[derive(Debug, Clone)]
pub struct AgentRequest {
    pub role: AgentRole,
    pub user_input: String,
    pub assembled_context: String,
}

/// Ordered conversation history for the Generic chat role, owned by the
/// invocation site (not by any rendering component). Replayed in full on
/// every call; length is unbounded here — truncation is a caller policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatThread {
    pub messages: Vec<HistoryTurn>,
}

impl ChatThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(HistoryTurn::user(text));
    }

    pub fn push_agent(&mut self, text: impl Into<String>) {
        self.messages.push(HistoryTurn::agent(text));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Routes free-text user queries to a role persona.
///
/// Engineer/Researcher dispatches are stateless across calls; the Generic
/// chat variant threads a [`ChatThread`] through. Results are never
/// auto-persisted — the caller decides whether to hand them to
/// [`NoteLedger::append`], typically under
/// [`AgentRole::default_note_category`].
pub struct AgentDispatcher {
    llm: Arc<dyn TextGenerator>,
}

impl AgentDispatcher {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// Build the bounded context string for a project: title, description,
    /// whiteboard, and the most recent notes.
    pub fn assemble_context(project: &Project) -> String {
        let recent = NoteLedger::filter(project, None);
        let notes_line = if recent.is_empty() {
            "none".to_string()
        } else {
            recent
                .iter()
                .take(MAX_CONTEXT_NOTES)
                .map(|n| format!("[{}] {}", n.category, n.content))
                .collect::<Vec<_>>()
                .join("; ")
        };

        format!(
            "Project: {}\nDescription: {}\nWhiteboard:\n{}\nRecent notes: {}",
            project.title, project.description, project.whiteboard, notes_line
        )
    }

    /// Stateless dispatch for Engineer/Researcher (also accepts Generic for
    /// a one-shot question without history). Returns the service text or the
    /// role's fallback reply — never an error.
    pub async fn dispatch(
        &self,
        role: AgentRole,
        user_input: &str,
        project: &Project,
    ) -> String {
        let request = AgentRequest {
            role,
            user_input: user_input.to_string(),
            assembled_context: Self::assemble_context(project),
        };

        match self.send(request, &project.description, Vec::new()).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(role = %role, error = %e, "Agent dispatch failed, using role fallback");
                role.fallback_reply().to_string()
            }
        }
    }

    /// Multi-turn Generic chat. The full thread is replayed on every call;
    /// on success the exchange is appended to the thread. On failure the
    /// thread is left untouched so a retry replays the same history.
    pub async fn dispatch_chat(
        &self,
        thread: &mut ChatThread,
        user_input: &str,
        project: &Project,
    ) -> String {
        let request = AgentRequest {
            role: AgentRole::Generic,
            user_input: user_input.to_string(),
            assembled_context: Self::assemble_context(project),
        };

        let history = thread.messages.clone();
        match self.send(request, &project.description, history).await {
            Ok(reply) => {
                thread.push_user(user_input);
                thread.push_agent(&reply);
                reply
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chat dispatch failed, using role fallback");
                AgentRole::Generic.fallback_reply().to_string()
            }
        }
    }

    async fn send(
        &self,
        request: AgentRequest,
        project_description: &str,
        history: Vec<HistoryTurn>,
    ) -> Result<String, crate::gemini::GenerationError> {
        let generation = GenerationRequest::text(request.user_input)
            .with_system(persona(request.role, project_description))
            .with_context(request.assembled_context)
            .with_history(history);

        self.llm.generate(generation).await
    }
}
