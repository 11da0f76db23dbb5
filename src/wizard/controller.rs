//! Wizard controller — layers the service calls on the state machine

use super::session::{WizardSession, WizardState};
use crate::gemini::{GenerationRequest, TextGenerator};
use crate::project::{Project, ProjectStatus};
use crate::store::ProjectStore;
use crate::whiteboard::ContextAccumulator;
use std::sync::Arc;

/// Built-in scoping questions used when the service fails or returns a
/// malformed list. A recovered failure — the dialogue continues normally.
pub const DEFAULT_SCOPING_QUESTIONS: [&str; 3] = [
    "What are the physics constraints?",
    "What is the MVP timeline?",
    "Where is the failure point?",
];

const SCOPING_SYSTEM: &str = r#"The user has a project idea.
Task: Ask 3 critical, clarifying technical questions to determine whether the idea is viable or the user is missing the point.
Return a JSON array of strings, nothing else."#;

const TITLE_WORDS: usize = 5;

fn scoping_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}

/// Short display title from the founding idea: its first few words, with an
/// ellipsis only when something was actually cut.
fn derive_title(idea: &str) -> String {
    let words: Vec<&str> = idea.split_whitespace().collect();
    if words.len() <= TITLE_WORDS {
        words.join(" ")
    } else {
        format!("{}...", words[..TITLE_WORDS].join(" "))
    }
}

/// Drives one project genesis run: idea intake → clarifying questions →
/// answer collection → whiteboard synthesis → project creation.
///
/// Only one session exists per controller; starting a new run discards any
/// session in flight. All controller methods borrow the controller mutably,
/// so whiteboard-producing calls are serialized by construction, and
/// dropping an in-flight future (navigating away) discards the eventual
/// response without creating a project.
pub struct WizardController {
    llm: Arc<dyn TextGenerator>,
    store: Arc<dyn ProjectStore>,
    session: WizardSession,
}

impl WizardController {
    pub fn new(llm: Arc<dyn TextGenerator>, store: Arc<dyn ProjectStore>) -> Self {
        Self {
            llm,
            store,
            session: WizardSession::new(),
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Start a fresh run. A session already in flight is discarded first —
    /// two wizard sessions never coexist.
    pub fn start(&mut self) {
        if self.session.state() != WizardState::Idle {
            tracing::debug!("Discarding in-flight wizard session before starting a new one");
            self.session.reset();
        }
        self.session.begin();
    }

    /// Submit the founding idea and fetch the scoping questions.
    ///
    /// Returns `false` for a blank idea (the session stays in place, no call
    /// is made). Service failures are recovered with the built-in default
    /// question set, so a `true` return always lands in `UserAnswering`.
    pub async fn submit_idea(&mut self, idea: &str) -> bool {
        if !self.session.submit_idea(idea) {
            return false;
        }

        let questions = self.scoping_questions(idea).await;
        self.session.questions_ready(questions)
    }

    /// Record the answer for question `index`.
    pub fn set_answer(&mut self, index: usize, answer: impl Into<String>) -> bool {
        self.session.set_answer(index, answer)
    }

    /// Whether the final submit is currently enabled. Every answer slot is
    /// initialized when the questions arrive, so this is purely a state
    /// check.
    pub fn can_generate(&self) -> bool {
        self.session.state() == WizardState::UserAnswering
    }

    /// Synthesize the whiteboard, create the project, persist it, and clear
    /// the session. `None` if called out of order.
    pub async fn finish(&mut self) -> Option<Project> {
        if !self.session.begin_synthesis() {
            return None;
        }

        let idea = self.session.idea().to_string();
        let qa_pairs = self.session.qa_pairs();

        let whiteboard = ContextAccumulator::new(self.llm.clone())
            .synthesize_initial(&idea, &qa_pairs)
            .await;

        let mut project = Project::new(derive_title(&idea), idea);
        project.status = ProjectStatus::InProgress;
        project.whiteboard = whiteboard;

        if let Err(e) = self.store.put(&project).await {
            // The caller still gets the project; a later write catches up
            tracing::warn!(project_id = %project.id, error = %e, "Failed to persist new project");
        }
        tracing::info!(project_id = %project.id, title = %project.title, "Created project from wizard");

        self.session.reset();
        Some(project)
    }

    /// Cancel the run in any state. The session is discarded and no project
    /// is created.
    pub fn cancel(&mut self) {
        self.session.reset();
    }

    /// Ask the service for the scoping questions, validating the structured
    /// response: it must decode as a non-empty JSON array of non-blank
    /// strings. Anything else is a service failure and yields the default
    /// set.
    async fn scoping_questions(&self, idea: &str) -> Vec<String> {
        let request = GenerationRequest::text(format!("Project idea: \"{}\"", idea))
            .with_system(SCOPING_SYSTEM)
            .with_schema(scoping_schema());

        let reply = match self.llm.generate(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Scoping question generation failed, using defaults");
                return default_questions();
            }
        };

        match parse_question_list(&reply) {
            Some(questions) => questions,
            None => {
                tracing::warn!("Scoping question response was malformed, using defaults");
                default_questions()
            }
        }
    }
}

fn default_questions() -> Vec<String> {
    DEFAULT_SCOPING_QUESTIONS
        .iter()
        .map(|q| q.to_string())
        .collect()
}

/// Shape-validate a structured question-list reply.
fn parse_question_list(reply: &str) -> Option<Vec<String>> {
    let questions: Vec<String> = serde_json::from_str(reply).ok()?;
    if questions.is_empty() || questions.iter().any(|q| q.trim().is_empty()) {
        return None;
    }
    Some(questions)
}
