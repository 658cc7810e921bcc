use super::GenerationService;
use crate::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scriptable stand-in for the gateway client.
///
/// Queued responses are consumed in order; once drained, a minimal valid
/// course JSON is returned. Clones share state so tests can keep a probe.
#[derive(Clone)]
pub struct MockGatewayClient {
    responses: Arc<Mutex<VecDeque<Result<String>>>>,
    user_prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGatewayClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            user_prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn with_error(self, error: crate::Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn user_prompts(&self) -> Vec<String> {
        self.user_prompts.lock().unwrap().clone()
    }
}

impl Default for MockGatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGatewayClient {
    async fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String> {
        *self.call_count.lock().unwrap() += 1;
        self.user_prompts
            .lock()
            .unwrap()
            .push(user_prompt.to_string());

        match self.responses.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(r#"{"title":"Mock Course","description":"A generated course.","price":19,"modules":[],"chatbot_greeting":"Hello!","chatbot_personality":"Helpful"}"#.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn test_mock_returns_queued_responses_in_order() {
        let mock = MockGatewayClient::new()
            .with_response("first".to_string())
            .with_response("second".to_string());

        assert_eq!(mock.generate("s", "u").await.unwrap(), "first");
        assert_eq!(mock.generate("s", "u").await.unwrap(), "second");
        assert_eq!(mock.get_call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_default_response_is_valid_course_json() {
        let mock = MockGatewayClient::new();
        let raw = mock.generate("s", "u").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["title"], "Mock Course");
    }

    #[tokio::test]
    async fn test_mock_queued_error_is_returned() {
        let mock = MockGatewayClient::new().with_error(Error::RateLimited);
        assert!(matches!(
            mock.generate("s", "u").await,
            Err(Error::RateLimited)
        ));
    }

    #[tokio::test]
    async fn test_mock_records_user_prompts() {
        let mock = MockGatewayClient::new();
        mock.generate("s", "Course Title: Baking").await.unwrap();
        assert_eq!(mock.user_prompts(), vec!["Course Title: Baking"]);
    }
}
