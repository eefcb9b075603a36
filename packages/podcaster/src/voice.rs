//! Speaker label → voice handle resolution.

use std::collections::HashMap;
use std::path::Path;

use podcaster_domain::{VoiceError, VoiceHandle};

use crate::audio;
use crate::config::{HostVoice, VoicesConfig};
use crate::engine::{SemanticParams, SemanticPrompt, SpeechEngine};
use crate::error::{ConfigError, Result};

/// Fixed text used to condition embedding extraction from a voice sample.
pub const VOICE_PROMPT_TEXT: &str = "Hello, this is a voice prompt.";

/// Voice handles for every host, computed once at startup.
///
/// Lookups are read-only; nothing here touches the engine after
/// [`VoiceMap::build`] returns.
#[derive(Debug, Clone)]
pub struct VoiceMap {
    handles: HashMap<String, VoiceHandle>,
    fallback: VoiceHandle,
}

impl VoiceMap {
    /// Resolve every configured host to a handle.
    ///
    /// Hosts with a usable sample get an embedding; any failure along the way
    /// is logged and the host keeps its built-in preset. Only a fallback
    /// label that names no host is an error.
    pub async fn build<E: SpeechEngine>(
        voices: &VoicesConfig,
        engine: &E,
        params: &SemanticParams,
    ) -> Result<Self> {
        let mut handles = HashMap::with_capacity(voices.hosts.len());

        for host in &voices.hosts {
            let key = host.label.to_lowercase();
            let handle = match Self::embed_sample(host, engine, params).await {
                Some(Ok(handle)) => {
                    tracing::info!(host = %host.label, voice = %handle.describe(), "using custom voice");
                    handle
                }
                Some(Err(e)) => {
                    tracing::error!(
                        host = %host.label,
                        error = %e,
                        preset = %host.preset,
                        "custom voice failed, using preset"
                    );
                    VoiceHandle::Preset(host.preset.clone())
                }
                None => VoiceHandle::Preset(host.preset.clone()),
            };
            handles.insert(key, handle);
        }

        let fallback = handles
            .get(&voices.fallback.to_lowercase())
            .cloned()
            .ok_or_else(|| ConfigError::ValidationError {
                field: "voices.fallback".to_string(),
                reason: format!("`{}` does not name a host", voices.fallback),
            })?;

        Ok(Self { handles, fallback })
    }

    /// `None` when the host has no usable sample file.
    async fn embed_sample<E: SpeechEngine>(
        host: &HostVoice,
        engine: &E,
        params: &SemanticParams,
    ) -> Option<std::result::Result<VoiceHandle, VoiceError>> {
        let Some(path) = host.sample_path() else {
            tracing::warn!(host = %host.label, preset = %host.preset, "no voice sample configured, using preset");
            return None;
        };
        if !path.exists() {
            tracing::warn!(
                host = %host.label,
                path = %path.display(),
                preset = %host.preset,
                "voice sample not found, using preset"
            );
            return None;
        }

        Some(Self::embed_file(path, engine, params).await)
    }

    async fn embed_file<E: SpeechEngine>(
        path: &Path,
        engine: &E,
        params: &SemanticParams,
    ) -> std::result::Result<VoiceHandle, VoiceError> {
        let sample = audio::read_wav(path)?;
        if sample.is_empty() {
            return Err(VoiceError::AudioProcessing(format!(
                "{} contains no samples",
                path.display()
            )));
        }

        let target = engine.sample_rate();
        if sample.sample_rate() != target {
            tracing::warn!(
                path = %path.display(),
                sample_rate = sample.sample_rate(),
                engine_rate = target,
                "voice sample rate differs from engine, resampling"
            );
        }
        let sample = audio::conform(sample, target)?;

        let embedding = engine
            .generate_semantic(VOICE_PROMPT_TEXT, SemanticPrompt::Audio(&sample), params)
            .await?;
        Ok(VoiceHandle::Embedding(embedding))
    }

    /// Handle for `label`, case-insensitively. Unknown labels get the
    /// fallback host's voice.
    pub fn resolve(&self, label: &str) -> &VoiceHandle {
        self.handles.get(&label.to_lowercase()).unwrap_or_else(|| {
            tracing::debug!(speaker = label, "unknown speaker, using fallback voice");
            &self.fallback
        })
    }

    /// Whether `label` names a configured host.
    pub fn is_known(&self, label: &str) -> bool {
        self.handles.contains_key(&label.to_lowercase())
    }
}
