//! Remote completion clients used by the plan generator.

pub mod anthropic;
pub mod client;
pub mod error;

pub use anthropic::AnthropicClient;
pub use client::{CompletionClient, CompletionRequest};
pub use error::LlmError;
