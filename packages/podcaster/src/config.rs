//! Configuration management for podcaster
//!
//! Everything the pipeline needs is fixed here at startup: model selection,
//! per-stage token budgets, prompt text, the two host voices and the speech
//! engine settings. The struct is loaded once, validated, and then handed to
//! each component by reference; nothing reads process environment later
//! except the provider API key.

use std::path::{Path, PathBuf};

use podcaster_domain::VoicePreset;
use serde::{Deserialize, Serialize};

use crate::engine::SemanticParams;
use crate::error::{ConfigError, IoErrorExt, Result, config_error};
use crate::prompts;

/// Default Groq model used for all three script stages.
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";
/// OpenAI-compatible Groq endpoint.
pub const DEFAULT_GENERATOR_URL: &str = "https://api.groq.com/openai/v1";
/// Local Bark inference server.
pub const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8765";
/// Bark renders at 24 kHz mono.
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastConfig {
    pub generator: GeneratorConfig,
    pub prompts: PromptConfig,
    pub voices: VoicesConfig,
    pub engine: EngineConfig,
}

/// Text-generation provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub model: String,

    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Per-request timeout. Unset means the HTTP client's own behaviour.
    #[serde(rename = "request-timeout-secs", skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    #[serde(rename = "max-tokens")]
    pub max_tokens: TokenBudgets,
}

/// Per-stage `max_tokens` budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenBudgets {
    pub outline: u32,

    #[serde(rename = "full-script")]
    pub full_script: u32,

    pub dialogue: u32,
}

/// Prompt templates and the static host-profile text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    #[serde(rename = "host-profiles")]
    pub host_profiles: String,

    pub outline: String,

    pub expand: String,

    pub dialogue: String,
}

/// The two hosts and which one catches unrecognized speaker labels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicesConfig {
    /// Label of the host used for any speaker that matches no other host.
    pub fallback: String,

    pub hosts: Vec<HostVoice>,
}

/// One host's voice: a built-in preset and an optional custom sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostVoice {
    /// Lower-case speaker label as it appears in the dialogue.
    pub label: String,

    pub preset: VoicePreset,

    /// WAV recording to derive an embedding from. `None`, an empty path or
    /// the literal `null` all mean "use the preset".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<PathBuf>,
}

/// Speech engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(rename = "base-url")]
    pub base_url: String,

    #[serde(rename = "use-small-models")]
    pub use_small_models: bool,

    #[serde(rename = "offload-cpu")]
    pub offload_cpu: bool,

    #[serde(rename = "sample-rate")]
    pub sample_rate: u32,

    /// Per-request timeout. Unset means the HTTP client's own behaviour.
    #[serde(rename = "request-timeout-secs", skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    pub semantic: SemanticParams,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GENERATOR_URL.to_string(),
            max_tokens: TokenBudgets::default(),
            request_timeout_secs: None,
        }
    }
}

impl Default for TokenBudgets {
    fn default() -> Self {
        Self {
            outline: 8000,
            full_script: 8000,
            dialogue: 8000,
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            host_profiles: prompts::HOST_PROFILES.to_string(),
            outline: prompts::OUTLINE_TEMPLATE.to_string(),
            expand: prompts::EXPAND_TEMPLATE.to_string(),
            dialogue: prompts::DIALOGUE_TEMPLATE.to_string(),
        }
    }
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            hosts: vec![
                HostVoice {
                    label: "mike".to_string(),
                    preset: VoicePreset::english_speaker(6),
                    sample: None,
                },
                HostVoice {
                    label: "rachel".to_string(),
                    preset: VoicePreset::english_speaker(9),
                    sample: Some(PathBuf::from("bark_voice_samples/female.wav")),
                },
            ],
            fallback: "rachel".to_string(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENGINE_URL.to_string(),
            use_small_models: true,
            offload_cpu: false,
            sample_rate: DEFAULT_SAMPLE_RATE,
            semantic: SemanticParams::default(),
            request_timeout_secs: None,
        }
    }
}

impl HostVoice {
    /// The sample path, if one is really configured.
    pub fn sample_path(&self) -> Option<&Path> {
        self.sample
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty() && p.as_os_str() != "null")
    }
}

impl PodcastConfig {
    /// Default location: `<config dir>/podcaster/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("podcaster").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: explicit.to_path_buf(),
                    }
                    .into());
                }
                explicit.to_path_buf()
            }
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(found) => found,
                None => {
                    tracing::debug!("no config file found, using defaults");
                    let config = Self::default();
                    config.validate()?;
                    return Ok(config);
                }
            },
        };

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_path(&path)?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::ParseError {
            path: path.clone(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(ConfigError::from)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.generator.model.trim().is_empty() {
            return Err(config_error("generator.model", "cannot be empty").into());
        }

        let budgets = self.generator.max_tokens;
        for (field, value) in [
            ("generator.max-tokens.outline", budgets.outline),
            ("generator.max-tokens.full-script", budgets.full_script),
            ("generator.max-tokens.dialogue", budgets.dialogue),
        ] {
            if value == 0 {
                return Err(config_error(field, "must be greater than 0").into());
            }
        }

        if self.voices.hosts.len() != 2 {
            return Err(ConfigError::ValidationError {
                field: "voices.hosts".to_string(),
                reason: format!("expected exactly 2 hosts, found {}", self.voices.hosts.len()),
            }
            .into());
        }

        for (i, host) in self.voices.hosts.iter().enumerate() {
            if host.label.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    field: format!("voices.hosts[{i}].label"),
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
            if host.preset.id().trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    field: format!("voices.hosts[{i}].preset"),
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
        }

        let first = self.voices.hosts[0].label.to_lowercase();
        let second = self.voices.hosts[1].label.to_lowercase();
        if first == second {
            return Err(config_error("voices.hosts", "host labels must be unique").into());
        }

        let fallback = self.voices.fallback.to_lowercase();
        if fallback != first && fallback != second {
            return Err(ConfigError::ValidationError {
                field: "voices.fallback".to_string(),
                reason: format!("`{}` does not name a host", self.voices.fallback),
            }
            .into());
        }

        for (field, timeout) in [
            ("generator.request-timeout-secs", self.generator.request_timeout_secs),
            ("engine.request-timeout-secs", self.engine.request_timeout_secs),
        ] {
            if timeout == Some(0) {
                return Err(config_error(field, "must be greater than 0").into());
            }
        }

        if self.engine.sample_rate == 0 {
            return Err(config_error("engine.sample-rate", "must be greater than 0").into());
        }

        Ok(())
    }
}
