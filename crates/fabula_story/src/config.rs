//! Engine configuration loaded from TOML.

use crate::prompts::SYSTEM_PROMPT;
use fabula_core::SamplingConfig;
use fabula_error::{ConfigError, FabulaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration: default model, sampling parameters, and the system
/// prompt seeding the story thread.
///
/// # Examples
///
/// ```
/// use fabula_story::StoryConfig;
///
/// let config: StoryConfig = toml::from_str(r#"
///     model = "Llama-3-8B-Instruct-q4f32_1-MLC-1k"
///
///     [sampling]
///     temperature = 0.9
/// "#).unwrap();
///
/// assert_eq!(*config.sampling().temperature(), 0.9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct StoryConfig {
    /// Default model identifier to initialize.
    #[serde(default = "default_model")]
    model: String,

    /// Sampling parameters passed at model initialization.
    #[serde(default)]
    sampling: SamplingConfig,

    /// System prompt seeding the story thread.
    #[serde(default = "default_system_prompt")]
    system_prompt: String,
}

fn default_model() -> String {
    "Llama-3-8B-Instruct-q4f32_1-MLC-1k".to_string()
}

fn default_system_prompt() -> String {
    SYSTEM_PROMPT.to_string()
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            sampling: SamplingConfig::default(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl StoryConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> FabulaResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is malformed or has unknown keys.
    pub fn from_toml(contents: &str) -> FabulaResult<Self> {
        let config = toml::from_str(contents)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = StoryConfig::from_toml("").unwrap();
        assert_eq!(config, StoryConfig::default());
        assert_eq!(config.model(), "Llama-3-8B-Instruct-q4f32_1-MLC-1k");
        assert_eq!(*config.sampling().temperature(), 0.7);
    }

    #[test]
    fn partial_toml_overrides_selectively() {
        let config = StoryConfig::from_toml(r#"model = "Phi-3-mini-4k-instruct-q4f16_1-MLC""#)
            .unwrap();
        assert_eq!(config.model(), "Phi-3-mini-4k-instruct-q4f16_1-MLC");
        assert_eq!(*config.sampling().top_p(), 0.95);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(StoryConfig::from_toml("modle = \"typo\"").is_err());
    }

    #[test]
    fn missing_file_surfaces_config_error() {
        let err = StoryConfig::from_file("/nonexistent/fabula.toml").unwrap_err();
        assert!(format!("{err}").contains("Config Error"));
    }
}
