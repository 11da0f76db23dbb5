//! Project Forge
//!
//! The engine behind the Builder feature of a local-first productivity app:
//! - Genesis wizard: a one-line idea → clarifying questions → a structured
//!   project whiteboard
//! - Context accumulation: the whiteboard grows with every answered question
//!   and never loses information on service failure
//! - Note ledger: append-only, category-tagged project timeline
//! - Agent dispatch: Engineer / Researcher / co-founder chat personas over
//!   the shared project context
//!
//! The external text generation service and the persistence layer sit behind
//! traits (`gemini::TextGenerator`, `store::ProjectStore`), each with a real
//! implementation and a mock.

pub mod agent;
pub mod gemini;
pub mod notes;
pub mod project;
pub mod store;
pub mod whiteboard;
pub mod wizard;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// Configuration
// ============================================================================

/// Engine configuration, loaded from the environment.
///
/// - `GEMINI_API_KEY` — API key for the generation service (optional)
/// - `FORGE_GENERATION_URL` — API root (default: Gemini v1beta)
/// - `FORGE_GENERATION_MODEL` — model name (default: `gemini-1.5-flash`)
/// - `FORGE_DATA_DIR` — project store location (default: platform data dir)
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub generation_url: String,
    pub generation_model: String,
    pub api_key: Option<String>,
    pub data_dir: PathBuf,
}

impl EngineConfig {
    /// Load configuration from the environment (a `.env` file is honored).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            generation_url: std::env::var("FORGE_GENERATION_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            generation_model: std::env::var("FORGE_GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            data_dir: std::env::var("FORGE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| store::JsonFileStore::default_root()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// ============================================================================
// Engine assembly
// ============================================================================

/// Shared engine state: the generation client and the project store, plus
/// constructors for the components that operate on them.
#[derive(Clone)]
pub struct Engine {
    pub llm: Arc<dyn gemini::TextGenerator>,
    pub store: Arc<dyn store::ProjectStore>,
}

impl Engine {
    /// Create an engine with the real Gemini client and the file-backed
    /// store described by `config`.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let llm = Arc::new(gemini::GeminiClient::new(
            config.generation_url.clone(),
            config.generation_model.clone(),
            config.api_key.clone(),
        ));
        let store = Arc::new(store::JsonFileStore::new(config.data_dir.clone())?);

        Ok(Self { llm, store })
    }

    /// Create an engine from explicit components (tests use the mocks).
    pub fn with_components(
        llm: Arc<dyn gemini::TextGenerator>,
        store: Arc<dyn store::ProjectStore>,
    ) -> Self {
        Self { llm, store }
    }

    /// A fresh wizard run over this engine's collaborators.
    pub fn wizard(&self) -> wizard::WizardController {
        wizard::WizardController::new(self.llm.clone(), self.store.clone())
    }

    pub fn accumulator(&self) -> whiteboard::ContextAccumulator {
        whiteboard::ContextAccumulator::new(self.llm.clone())
    }

    pub fn ledger(&self) -> notes::NoteLedger {
        notes::NoteLedger::new(self.store.clone())
    }

    pub fn dispatcher(&self) -> agent::AgentDispatcher {
        agent::AgentDispatcher::new(self.llm.clone())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard};

    /// Env vars are process-global, so tests that mutate them serialize on
    /// this lock regardless of which module they live in.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    /// Combined env var test to avoid parallel test race conditions.
    #[test]
    fn test_from_env_lifecycle() {
        let _env = crate::test_support::env_guard();

        fn clear_env() {
            std::env::remove_var("FORGE_GENERATION_URL");
            std::env::remove_var("FORGE_GENERATION_MODEL");
            std::env::remove_var("GEMINI_API_KEY");
            std::env::remove_var("FORGE_DATA_DIR");
        }

        // Phase 1: defaults
        clear_env();
        let config = EngineConfig::from_env();
        assert_eq!(config.generation_model, "gemini-1.5-flash");
        assert!(config.generation_url.contains("generativelanguage"));
        assert!(config.api_key.is_none());

        // Phase 2: custom values
        std::env::set_var("FORGE_GENERATION_URL", "http://localhost:1234/v1beta");
        std::env::set_var("FORGE_GENERATION_MODEL", "gemini-2.0-flash");
        std::env::set_var("GEMINI_API_KEY", "key-123");
        std::env::set_var("FORGE_DATA_DIR", "/tmp/forge-test-data");

        let config = EngineConfig::from_env();
        assert_eq!(config.generation_url, "http://localhost:1234/v1beta");
        assert_eq!(config.generation_model, "gemini-2.0-flash");
        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/forge-test-data"));

        // Phase 3: empty key treated as absent
        std::env::set_var("GEMINI_API_KEY", "");
        let config = EngineConfig::from_env();
        assert!(config.api_key.is_none());

        clear_env();
    }

    #[tokio::test]
    async fn test_engine_with_mock_components() {
        let llm = Arc::new(gemini::MockTextGenerator::new());
        let store = Arc::new(store::MemoryStore::new());
        let engine = Engine::with_components(llm, store);

        // Component constructors share the same collaborators
        let mut controller = engine.wizard();
        controller.start();
        assert!(controller.submit_idea("an idea").await);
    }
}
