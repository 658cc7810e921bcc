use super::GenerationService;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Config};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// HTTP client for the AI gateway's chat-completions endpoint.
///
/// The bearer credential is injected at construction and never mutated. Its
/// absence is checked before any network call so a misconfigured deployment
/// fails fast per request.
pub struct GatewayClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GatewayClient {
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        model: String,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url,
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone(),
            config.gateway_base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to AI gateway: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => Error::RateLimited,
                StatusCode::PAYMENT_REQUIRED => Error::CreditsExhausted,
                _ => {
                    let body = response.text().await?;
                    tracing::error!("AI gateway error (status {}): {}", status, body);
                    Error::Gateway {
                        status: status.as_u16(),
                        body,
                    }
                }
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse AI gateway response: {}\nBody: {}", e, body);
            Error::Serialization(e)
        })
    }
}

#[async_trait]
impl GenerationService for GatewayClient {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(system_prompt.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(user_prompt.to_string()),
                },
            ],
            stream: false,
        };

        let response = self.chat_completion(api_key, &request).await?;
        response.into_content()
    }
}
