//! Text generation module
//!
//! Wraps the external Gemini text generation API behind a narrow seam so the
//! rest of the engine never talks HTTP directly.
//!
//! Architecture follows the project pattern (trait + impl + mock):
//! - `TextGenerator` trait: async interface for text/JSON generation
//! - `GeminiClient`: real implementation over the `generateContent` REST API
//! - `MockTextGenerator`: scriptable mock for tests

pub mod client;
pub mod mock;
pub mod traits;
pub mod types;

pub use client::GeminiClient;
pub use mock::MockTextGenerator;
pub use traits::TextGenerator;
pub use types::{GenerationError, GenerationRequest, HistoryTurn, Speaker};
