//! Application orchestration for course generation requests.

use crate::course::parse_course_document;
use crate::gateway::{GatewayClient, GenerationService};
use crate::models::{Config, CourseDocument, GenerationRequest};
use crate::prompts;
use crate::Result;
use tracing::info;

/// Coordinates prompt building, the gateway round trip, and parsing.
pub struct App {
    gateway: Box<dyn GenerationService>,
}

impl App {
    /// Build an app from a concrete gateway service.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(gateway: Box<dyn GenerationService>) -> Self {
        Self { gateway }
    }

    /// Construct an app from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        info!("Gateway model: {}", config.model);
        Self::with_services(Box::new(GatewayClient::from_config(config)))
    }

    /// Generate a course document for one request.
    ///
    /// Gateway and extraction failures propagate; parse failures do not —
    /// they resolve to the degraded document and still count as success.
    pub async fn generate_course(&self, request: &GenerationRequest) -> Result<CourseDocument> {
        info!("Generating course content for title: {:?}", request.title);

        let user_prompt = prompts::course_user_prompt(request);
        let raw = self
            .gateway
            .generate(prompts::COURSE_SYSTEM, &user_prompt)
            .await?;
        info!("Received {} chars of generated content", raw.len());

        Ok(parse_course_document(&request.title, &raw))
    }
}
