//! AI gateway integration for course content generation
//!
//! Provides the chat-completion client used to turn prompt pairs into raw
//! course content, plus a scriptable mock for tests.

pub mod client;
pub mod mock;

pub use client::GatewayClient;
pub use mock::MockGatewayClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GenerationService: Send + Sync {
    /// One complete (non-streaming) generation round trip. Returns the raw
    /// model text; structure is the parser's concern.
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}
