//! Context accumulator — grows the whiteboard, never breaks it

use super::prompts;
use crate::gemini::{GenerationRequest, TextGenerator};
use crate::notes::models::ProjectNote;
use crate::project::Project;
use std::sync::Arc;

/// Placeholder written to the whiteboard when the initial synthesis fails.
/// The project is still created — nothing the user typed is lost.
pub const SYNTHESIS_FALLBACK: &str = "Whiteboard synthesis is unavailable right now. \
Your idea and answers are saved — edit this whiteboard directly or retry later.";

/// Generic clarifying question used when the service cannot propose one.
pub const FALLBACK_QUESTION: &str =
    "What is the single riskiest assumption in this project right now?";

/// One answered scoping question from the wizard dialogue.
#[derive(Debug, Clone)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Owns whiteboard growth for a project.
///
/// All operations return a usable value: service failures degrade to the
/// documented fallback and are logged, never propagated.
pub struct ContextAccumulator {
    llm: Arc<dyn TextGenerator>,
}

impl ContextAccumulator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// One-shot synthesis of the initial whiteboard from the founding idea
    /// and the wizard's Q&A dialogue.
    pub async fn synthesize_initial(&self, idea: &str, qa_pairs: &[QaPair]) -> String {
        let qa_context = qa_pairs
            .iter()
            .map(|qa| format!("Q: {}\nA: {}", qa.question, qa.answer))
            .collect::<Vec<_>>()
            .join("\n");

        let request = GenerationRequest::text(format!(
            "Idea: {}\n\nScoping answers:\n{}",
            idea, qa_context
        ))
        .with_system(prompts::SYNTHESIS_SYSTEM);

        match self.llm.generate(request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("Whiteboard synthesis returned empty text, using placeholder");
                SYNTHESIS_FALLBACK.to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Whiteboard synthesis failed, using placeholder");
                SYNTHESIS_FALLBACK.to_string()
            }
        }
    }

    /// Fold one new question/answer fact into the whiteboard.
    ///
    /// The result is expected to be a superset of the input. On any service
    /// failure (or an empty reply) the input whiteboard is returned
    /// unmodified — refinement must never corrupt existing context.
    pub async fn refine(&self, current_whiteboard: &str, question: &str, answer: &str) -> String {
        let request = GenerationRequest::text(format!(
            "New fact:\nQ: {}\nA: {}",
            question, answer
        ))
        .with_system(prompts::REFINE_SYSTEM)
        .with_context(format!("Current whiteboard:\n{}", current_whiteboard));

        match self.llm.generate(request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("Whiteboard refinement returned empty text, keeping current document");
                current_whiteboard.to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Whiteboard refinement failed, keeping current document");
                current_whiteboard.to_string()
            }
        }
    }

    /// Ask the service for exactly one proactive clarifying question given
    /// the current context. Falls back to a generic question on failure.
    pub async fn propose_question(
        &self,
        whiteboard: &str,
        recent_notes: &[ProjectNote],
    ) -> String {
        let notes_context = if recent_notes.is_empty() {
            "none".to_string()
        } else {
            recent_notes
                .iter()
                .map(|n| format!("[{}] {}", n.category, n.content))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let request = GenerationRequest::text("What should I clarify next?")
            .with_system(prompts::PROPOSE_QUESTION_SYSTEM)
            .with_context(format!(
                "Whiteboard:\n{}\n\nRecent notes:\n{}",
                whiteboard, notes_context
            ));

        match self.llm.generate(request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) | Err(_) => {
                tracing::debug!("Question proposal failed, using generic fallback");
                FALLBACK_QUESTION.to_string()
            }
        }
    }

    /// Apply a direct user edit to the whiteboard. User edits always win and
    /// never go through the service.
    pub fn apply_user_edit(project: &mut Project, text: impl Into<String>) {
        project.whiteboard = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::MockTextGenerator;
    use crate::notes::models::NoteCategory;

    fn accumulator_with(llm: Arc<MockTextGenerator>) -> ContextAccumulator {
        ContextAccumulator::new(llm)
    }

    #[tokio::test]
    async fn test_synthesize_initial_uses_service_text() {
        let llm = Arc::new(MockTextGenerator::new());
        llm.push_reply("# Roadmap\nPhase 1: frame");
        let acc = accumulator_with(llm.clone());

        let qa = vec![QaPair::new("Battery?", "LiFePO4")];
        let whiteboard = acc.synthesize_initial("solar mower", &qa).await;
        assert_eq!(whiteboard, "# Roadmap\nPhase 1: frame");

        // The Q&A made it into the request
        let requests = llm.requests();
        assert!(requests[0].user.contains("Q: Battery?"));
        assert!(requests[0].user.contains("A: LiFePO4"));
    }

    #[tokio::test]
    async fn test_synthesize_initial_failure_yields_placeholder() {
        let llm = Arc::new(MockTextGenerator::new());
        llm.push_failure("down");
        let acc = accumulator_with(llm);

        let whiteboard = acc.synthesize_initial("idea", &[]).await;
        assert_eq!(whiteboard, SYNTHESIS_FALLBACK);
    }

    #[tokio::test]
    async fn test_refine_failure_returns_input_unchanged() {
        let llm = Arc::new(MockTextGenerator::new());
        llm.push_failure("down");
        let acc = accumulator_with(llm);

        let current = "# Whiteboard\nExisting fact.";
        let refined = acc.refine(current, "Q", "A").await;
        assert_eq!(refined, current);
    }

    #[tokio::test]
    async fn test_refine_empty_reply_returns_input_unchanged() {
        let llm = Arc::new(MockTextGenerator::new());
        llm.push_reply("   ");
        let acc = accumulator_with(llm);

        let current = "existing";
        assert_eq!(acc.refine(current, "Q", "A").await, current);
    }

    #[tokio::test]
    async fn test_refine_passes_whiteboard_as_context() {
        let llm = Arc::new(MockTextGenerator::new());
        llm.push_reply("updated whiteboard");
        let acc = accumulator_with(llm.clone());

        let refined = acc.refine("old board", "Q1", "A1").await;
        assert_eq!(refined, "updated whiteboard");

        let requests = llm.requests();
        assert!(requests[0]
            .context
            .as_deref()
            .unwrap()
            .contains("old board"));
        assert!(requests[0].user.contains("Q: Q1"));
    }

    #[tokio::test]
    async fn test_propose_question_fallback() {
        let llm = Arc::new(MockTextGenerator::new());
        llm.push_failure("down");
        let acc = accumulator_with(llm);

        let question = acc.propose_question("board", &[]).await;
        assert_eq!(question, FALLBACK_QUESTION);
    }

    #[tokio::test]
    async fn test_propose_question_includes_notes() {
        let llm = Arc::new(MockTextGenerator::new());
        llm.push_reply("Which motor controller?");
        let acc = accumulator_with(llm.clone());

        let notes = vec![ProjectNote::new("picked a frame", NoteCategory::Log)];
        let question = acc.propose_question("board", &notes).await;
        assert_eq!(question, "Which motor controller?");

        let requests = llm.requests();
        assert!(requests[0]
            .context
            .as_deref()
            .unwrap()
            .contains("picked a frame"));
    }

    #[test]
    fn test_apply_user_edit_wins() {
        let mut project = Project::new("P", "");
        project.whiteboard = "machine written".into();
        ContextAccumulator::apply_user_edit(&mut project, "my own words");
        assert_eq!(project.whiteboard, "my own words");
    }
}
