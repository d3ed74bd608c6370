//! Completion client abstraction.

use async_trait::async_trait;

use super::LlmError;

/// A single-turn text completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Something that turns a prompt into text.
///
/// Implementations make at most one outbound call per `complete`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}
