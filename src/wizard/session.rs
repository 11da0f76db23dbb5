//! Wizard state machine
//!
//! A pure `(state, event) -> state'` value type. Transition methods return
//! `false` and leave the session untouched when their precondition does not
//! hold, so misuse is impossible rather than an error path.

use crate::whiteboard::QaPair;

/// Phase of the project genesis dialogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardState {
    /// No wizard in flight
    #[default]
    Idle,
    /// Collecting the one-line idea
    InputIdea,
    /// Waiting for the service to produce scoping questions
    AiQuestioning,
    /// Collecting answers to the scoping questions
    UserAnswering,
    /// Waiting for the whiteboard synthesis
    GeneratingPlan,
}

/// Transient state of one project genesis run. Never persisted — discarded
/// on completion or cancellation.
///
/// Invariant: from `UserAnswering` onward, `answers.len() == questions.len()`
/// and unanswered slots hold the empty string.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    state: WizardState,
    idea: String,
    questions: Vec<String>,
    answers: Vec<String>,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// `Idle` → `InputIdea`.
    pub fn begin(&mut self) -> bool {
        if self.state != WizardState::Idle {
            return false;
        }
        self.state = WizardState::InputIdea;
        true
    }

    /// `InputIdea` → `AiQuestioning` with a non-blank idea; rejected
    /// otherwise (stays in place, nothing recorded).
    pub fn submit_idea(&mut self, idea: &str) -> bool {
        if self.state != WizardState::InputIdea || idea.trim().is_empty() {
            return false;
        }
        self.idea = idea.to_string();
        self.state = WizardState::AiQuestioning;
        true
    }

    /// `AiQuestioning` → `UserAnswering` once the question list arrives.
    /// Every answer slot is initialized to the empty string so the
    /// `answers.len() == questions.len()` invariant holds from here on.
    /// An empty list is rejected — the caller substitutes the default set
    /// before calling.
    pub fn questions_ready(&mut self, questions: Vec<String>) -> bool {
        if self.state != WizardState::AiQuestioning || questions.is_empty() {
            return false;
        }
        self.answers = vec![String::new(); questions.len()];
        self.questions = questions;
        self.state = WizardState::UserAnswering;
        true
    }

    /// Record the answer for question `index`. Valid only while answering.
    pub fn set_answer(&mut self, index: usize, answer: impl Into<String>) -> bool {
        if self.state != WizardState::UserAnswering || index >= self.answers.len() {
            return false;
        }
        self.answers[index] = answer.into();
        true
    }

    /// `UserAnswering` → `GeneratingPlan`. All slots are initialized by
    /// construction (empty string answers are allowed), so the only gate is
    /// the state itself.
    pub fn begin_synthesis(&mut self) -> bool {
        if self.state != WizardState::UserAnswering {
            return false;
        }
        self.state = WizardState::GeneratingPlan;
        true
    }

    /// The answered dialogue, aligned by index.
    pub fn qa_pairs(&self) -> Vec<QaPair> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .map(|(q, a)| QaPair::new(q.clone(), a.clone()))
            .collect()
    }

    /// Any state → `Idle`, discarding everything collected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
