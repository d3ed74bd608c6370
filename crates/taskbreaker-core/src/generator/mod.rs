//! Plan generation.
//!
//! [`PlanGenerator`] first asks a remote completion model for a plan and
//! checks the reply with the [`validator`]. Whenever that path is unavailable
//! or produces anything unusable, a deterministic template plan is built and
//! bin-packed instead, so [`PlanGenerator::generate`] always yields a plan.

pub mod fallback;
pub mod packing;
pub mod prompt;
pub mod response;
pub mod validator;

use std::{fmt, sync::Arc, time::Duration};

use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    llm::{CompletionClient, CompletionRequest, LlmError},
    models::{Plan, Preferences, TimeMode},
};

pub use fallback::fallback_plan;
pub use packing::pack;
pub use validator::{validate, ValidationError};

pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Input for one plan generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub task_name: String,
    pub time_mode: TimeMode,
    /// Number of days or hours, depending on `time_mode`
    pub amount: u32,
    /// Defaults apply when absent
    pub preferences: Option<Preferences>,
}

/// Reasons the remote path did not produce a plan.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion request failed: {0}")]
    Remote(#[from] LlmError),

    #[error("completion was empty")]
    EmptyResponse,

    #[error("completion is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("completion is not a valid plan: {0}")]
    Invalid(#[from] ValidationError),
}

/// Produces plans from a remote model with a template fallback.
#[derive(Clone)]
pub struct PlanGenerator {
    client: Option<Arc<dyn CompletionClient>>,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl PlanGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
            ..Self::offline()
        }
    }

    /// A generator that always uses the template fallback.
    pub fn offline() -> Self {
        Self {
            client: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Generates a plan for the request. Never fails: any problem with the
    /// remote path is logged and answered with the template plan.
    pub async fn generate(&self, request: &GenerationRequest) -> Plan {
        match self.generate_remote(request).await {
            Ok(plan) => {
                info!("Generated plan for '{}' from completion model", request.task_name);
                plan
            }
            Err(e) => {
                warn!("Using fallback plan for '{}': {e}", request.task_name);
                let preferences = request.preferences.clone().unwrap_or_default();
                fallback_plan(&request.task_name, request.time_mode, &preferences)
            }
        }
    }

    /// The primary path on its own: one completion call, then parse and
    /// validate the reply.
    pub async fn generate_remote(&self, request: &GenerationRequest) -> Result<Plan, GenerationError> {
        let client = self.client.as_ref().ok_or(LlmError::NotConfigured)?;
        let preferences = request.preferences.clone().unwrap_or_default();

        let completion = CompletionRequest {
            prompt: prompt::build_prompt(request, &preferences),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let text = tokio::time::timeout(self.timeout, client.complete(completion))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))??;
        debug!("Completion returned {} bytes", text.len());

        response::parse_plan(&text).map_err(|e| {
            debug!("Rejected completion: {e}");
            e
        })
    }
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::offline()
    }
}

impl fmt::Debug for PlanGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanGenerator")
            .field("has_client", &self.has_client())
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}
