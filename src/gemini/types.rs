//! Request and error types for the text generation seam

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who produced a turn in a replayed conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Agent,
}

/// One prior turn of a multi-turn conversation.
///
/// The engine replays the full history on every call — truncation is a
/// caller policy, not part of this contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl HistoryTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: text.into(),
        }
    }
}

/// A single request to the text generation service.
///
/// `system` carries the persona frame, `context` the assembled project
/// context, `user` the user's text. When `response_schema` is set the
/// service is asked for JSON conforming to that schema instead of free text.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub system: Option<String>,
    pub context: Option<String>,
    pub user: String,
    pub history: Vec<HistoryTurn>,
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationRequest {
    /// Plain free-text request.
    pub fn text(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Default::default()
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Error at the text generation seam.
///
/// Callers with a documented fallback value never see this type — the
/// component catches it, logs at warn level, and substitutes the fallback.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Could not reach the API (connect failure, timeout, TLS, …)
    #[error("failed to reach the text generation API: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status
    #[error("text generation API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The API answered 200 but the payload was not usable
    #[error("malformed text generation response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::text("hello")
            .with_system("persona")
            .with_context("ctx")
            .with_schema(serde_json::json!({"type": "ARRAY"}));

        assert_eq!(request.user, "hello");
        assert_eq!(request.system.as_deref(), Some("persona"));
        assert_eq!(request.context.as_deref(), Some("ctx"));
        assert!(request.response_schema.is_some());
        assert!(request.history.is_empty());
    }

    #[test]
    fn test_history_turn_constructors() {
        let turn = HistoryTurn::user("hi");
        assert_eq!(turn.speaker, Speaker::User);
        let turn = HistoryTurn::agent("hello");
        assert_eq!(turn.speaker, Speaker::Agent);
    }

    #[test]
    fn test_speaker_serde() {
        let json = serde_json::to_string(&Speaker::Agent).unwrap();
        assert_eq!(json, "\"agent\"");
        let speaker: Speaker = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(speaker, Speaker::User);
    }

    #[test]
    fn test_error_display() {
        let err = GenerationError::Api {
            status: 429,
            message: "quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "text generation API error (429): quota exceeded"
        );
    }
}
