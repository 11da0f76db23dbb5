//! Gemini HTTP client implementation
//!
//! Implements `TextGenerator` over the Gemini `generateContent` REST API.
//!
//! Configuration via environment variables:
//! - `GEMINI_API_KEY` (optional — unauthenticated calls fail at the API)
//! - `FORGE_GENERATION_URL` (default: `https://generativelanguage.googleapis.com/v1beta`)
//! - `FORGE_GENERATION_MODEL` (default: `gemini-1.5-flash`)

use super::traits::TextGenerator;
use super::types::{GenerationError, GenerationRequest, Speaker};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// HTTP-based text generator using the Gemini `generateContent` API.
///
/// Thread-safe and cheaply cloneable (shares the reqwest client internally).
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

// ============================================================================
// Wire types (Gemini REST format, camelCase)
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl GeminiClient {
    /// Create a new client with explicit configuration.
    ///
    /// `base_url` is the API root without a trailing slash (the client
    /// appends `/models/{model}:generateContent`).
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }

    /// Create a client from environment variables (see module docs).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("FORGE_GENERATION_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("FORGE_GENERATION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        Self::new(base_url, model, api_key)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Map the engine-level request to the Gemini wire format.
    ///
    /// History turns become alternating user/model contents; the assembled
    /// context is prepended to the final user turn rather than sent as a
    /// separate content so stateless calls stay a single turn.
    fn build_body(&self, request: &GenerationRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request
            .history
            .iter()
            .map(|turn| Content {
                role: Some(
                    match turn.speaker {
                        Speaker::User => "user",
                        Speaker::Agent => "model",
                    }
                    .to_string(),
                ),
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        let user_text = match &request.context {
            Some(context) => format!("{}\n\n{}", context, request.user),
            None => request.user.clone(),
        };
        contents.push(Content {
            role: Some("user".to_string()),
            parts: vec![Part { text: user_text }],
        });

        GenerateContentRequest {
            system_instruction: request.system.as_ref().map(|text| Content {
                role: None,
                parts: vec![Part { text: text.clone() }],
            }),
            contents,
            generation_config: request.response_schema.as_ref().map(|schema| {
                GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema: schema.clone(),
                }
            }),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let body = self.build_body(&request);

        let mut http_request = self.client.post(self.endpoint()).json(&body);
        if let Some(ref key) = self.api_key {
            http_request = http_request.header("x-goog-api-key", key);
        }

        let response = http_request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error)
                .map(|d| d.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::Malformed(
                "response contained no candidate text".into(),
            ));
        }

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
