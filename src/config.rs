//! Engine Configuration
//!
//! Defaults, then a JSON config file, then `KRISHI_*` environment variables
//! (a `.env` file is honoured by the binary), then CLI flags.

use crate::error::{AssistError, Result};
use crate::language::LanguageCode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const ENV_LANG: &str = "KRISHI_LANG";
pub const ENV_RESPONSE_DELAY_MS: &str = "KRISHI_RESPONSE_DELAY_MS";
pub const ENV_KNOWLEDGE_BASE: &str = "KRISHI_KNOWLEDGE_BASE";

/// Artificial "typing" pause before a bot reply is shown.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub default_language: LanguageCode,
    #[serde(default = "default_delay")]
    pub response_delay_ms: u64,
    /// JSON knowledge base replacing the built-in crop table.
    #[serde(default)]
    pub knowledge_base_path: Option<PathBuf>,
}

fn default_delay() -> u64 {
    DEFAULT_RESPONSE_DELAY_MS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_language: LanguageCode::En,
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            knowledge_base_path: None,
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AssistError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: EngineConfig = serde_json::from_str(&content)
            .map_err(|e| AssistError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `KRISHI_*` overrides read through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup(ENV_LANG) {
            self.default_language = code.parse()?;
        }
        if let Some(delay) = lookup(ENV_RESPONSE_DELAY_MS) {
            self.response_delay_ms = delay.trim().parse().map_err(|_| {
                AssistError::Config(format!("{} must be a whole number, got '{}'", ENV_RESPONSE_DELAY_MS, delay))
            })?;
        }
        if let Some(path) = lookup(ENV_KNOWLEDGE_BASE) {
            if !path.trim().is_empty() {
                self.knowledge_base_path = Some(PathBuf::from(path));
            }
        }
        Ok(self)
    }
}
