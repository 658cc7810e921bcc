//! Data models and structures
//!
//! Defines the core data structures for generation requests, course
//! documents, and API interactions with the AI gateway.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Metadata for an uploaded file referenced by a generation request.
///
/// Only the name reaches the prompt; content stays with the upload service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: u64,
}

/// Inbound course-generation request.
///
/// Everything except `title` is optional and defaults to empty. A missing
/// title is tolerated as well: the front-end forms own that validation, and
/// the service proceeds with whatever it was given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub files: Vec<FileMeta>,
    /// Reference links from the course builder. Accepted for forward
    /// compatibility; not interpolated into prompts.
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QaPair {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Lesson {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub qa_pairs: Vec<QaPair>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Module {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

const DEFAULT_CHATBOT_GREETING: &str = "Welcome! I'm here to help you learn.";
const DEFAULT_CHATBOT_PERSONALITY: &str = "Friendly and helpful instructor";

/// Number of characters of raw model output kept as the degraded description.
const DEGRADED_DESCRIPTION_CHARS: usize = 500;

/// Structured course produced per request.
///
/// Every field defaults so a model response missing a field still decodes;
/// the model's adherence to the requested schema is trusted beyond that.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CourseDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub chatbot_greeting: String,
    #[serde(default)]
    pub chatbot_personality: String,
    /// Unparsed model output, present only on the degraded fallback document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl CourseDocument {
    /// Fallback document used when model output cannot be parsed.
    ///
    /// Carries the request title, a truncated description, and the full raw
    /// text so the caller can still show something.
    pub fn degraded(title: &str, raw_content: &str) -> Self {
        Self {
            title: title.to_string(),
            description: raw_content.chars().take(DEGRADED_DESCRIPTION_CHARS).collect(),
            price: None,
            modules: Vec::new(),
            chatbot_greeting: DEFAULT_CHATBOT_GREETING.to_string(),
            chatbot_personality: DEFAULT_CHATBOT_PERSONALITY.to_string(),
            raw_content: Some(raw_content.to_string()),
        }
    }
}

/// Success envelope returned by the generation endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub course: CourseDocument,
}

// AI gateway request/response models (OpenAI-style chat completions)

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

impl ChatCompletionResponse {
    /// Extract the first choice's message text.
    ///
    /// Empty `choices` or missing/empty content is `EmptyGeneration`, not a
    /// decode failure.
    pub fn into_content(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(Error::EmptyGeneration)
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the AI gateway. Optional at load time; its
    /// absence is reported per-request so the endpoint can answer 500
    /// instead of refusing to start.
    pub api_key: Option<String>,
    pub gateway_base_url: String,
    pub model: String,
    pub bind_addr: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: std::env::var("AI_GATEWAY_API_KEY").ok(),
            gateway_base_url: std::env::var("AI_GATEWAY_BASE_URL")
                .unwrap_or_else(|_| "https://ai.gateway.sidecourses.dev".to_string()),
            model: std::env::var("AI_GATEWAY_MODEL")
                .unwrap_or_else(|_| "google/gemini-2.5-flash".to_string()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string()),
            request_timeout_secs: std::env::var("AI_GATEWAY_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(30),
        })
    }
}
