//! Configuration for the remote completion model.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! environment variables.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    generator::PlanGenerator,
    llm::AnthropicClient,
};

pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

const CONFIG_FILE: &str = "config.json";

/// Completion model settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            max_tokens: 2000,
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Loads configuration from `path`, or from the XDG config directory when
    /// no path is given, then applies environment overrides.
    ///
    /// An explicit path must exist. A missing XDG file means defaults.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path.as_ref())?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = serde_json::from_str(&content).map_err(|e| PlannerError::Configuration {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Applies `TASKBREAKER_API_KEY` (or `ANTHROPIC_API_KEY`),
    /// `TASKBREAKER_MODEL` and `TASKBREAKER_BASE_URL`. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("TASKBREAKER_API_KEY").or_else(|| var("ANTHROPIC_API_KEY")) {
            self.api_key = Some(key);
        }
        if let Some(model) = var("TASKBREAKER_MODEL") {
            self.model = model;
        }
        if let Some(base_url) = var("TASKBREAKER_BASE_URL") {
            self.base_url = base_url;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds a plan generator. A remote client is attached only when an API
    /// key is available; otherwise every plan comes from the fallback.
    pub fn generator(&self) -> PlanGenerator {
        let generator = match AnthropicClient::from_config(self) {
            Ok(client) => PlanGenerator::new(Arc::new(client)),
            Err(e) => {
                if self.api_key.is_some() {
                    warn!("Completion client unavailable: {e}");
                } else {
                    debug!("No API key configured, plans will use the fallback");
                }
                PlanGenerator::offline()
            }
        };
        generator
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .with_timeout(self.timeout())
    }
}

fn default_config_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("taskbreaker").find_config_file(CONFIG_FILE)
}
