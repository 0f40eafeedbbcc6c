//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Scripted behavior for the mock provider.
pub enum MockBehavior {
    /// Return this text as the model reply.
    Reply(String),
    /// Fail with a network error carrying this description.
    FailNetwork(String),
    /// Fail as if the API rejected the call.
    FailApi(String),
    /// Succeed but produce no text at all.
    EmptyReply,
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    behavior: MockBehavior,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self { behavior }
    }

    /// Shorthand for a mock that replies with the given text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _system_instruction: &str,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            MockBehavior::FailNetwork(msg) => Err(ProviderError::NetworkError(msg.clone())),
            MockBehavior::FailApi(msg) => Err(ProviderError::ApiError(msg.clone())),
            MockBehavior::EmptyReply => Ok(ProviderResponse {
                text: None,
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: 0,
                finish_reason: FinishReason::Complete,
            }),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
