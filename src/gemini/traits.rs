//! TextGenerator trait definition
//!
//! Defines the abstract interface to the external text generation service.
//! Same pattern as the store traits: async trait + Send + Sync for
//! `Arc<dyn TextGenerator>` usage.

use super::types::{GenerationError, GenerationRequest};
use async_trait::async_trait;

/// Abstract interface to a stateless text generation service.
///
/// Implementations must be thread-safe (`Send + Sync`) to be shared across
/// async tasks via `Arc<dyn TextGenerator>`.
///
/// # Implementations
///
/// - [`GeminiClient`](super::GeminiClient): HTTP client for the Gemini
///   `generateContent` REST endpoint
/// - [`MockTextGenerator`](super::MockTextGenerator): scriptable mock for
///   tests (queued replies and forced failures)
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given request.
    ///
    /// Returns the raw response text. When `request.response_schema` is set
    /// the text is expected to be JSON conforming to that schema, but shape
    /// validation is the caller's responsibility — the service contract only
    /// promises *some* text back.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`](super::GenerationError) on transport
    /// failure, API error, or an unusable payload.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;

    /// The name of the underlying model, for diagnostics.
    fn model_name(&self) -> &str;
}
