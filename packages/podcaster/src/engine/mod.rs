//! Speech synthesis engine seam.
//!
//! The engine exposes two synthesis paths: a single call for built-in
//! presets, and a two-stage path (text → semantic tokens conditioned on a
//! voice → waveform) for derived embeddings, which the single call cannot
//! accept.

mod bark;

pub use bark::BarkHttpEngine;

use podcaster_domain::{AudioBuffer, VoiceEmbedding, VoiceError, VoicePreset};
use serde::{Deserialize, Serialize};

/// What to condition semantic-token generation on.
#[derive(Debug, Clone, Copy)]
pub enum SemanticPrompt<'a> {
    /// Raw voice sample at the engine's sample rate.
    Audio(&'a AudioBuffer),
    /// A previously derived embedding.
    Embedding(&'a VoiceEmbedding),
}

/// Sampling knobs for the text → semantic stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticParams {
    pub temperature: f32,

    #[serde(rename = "min-eos-p")]
    pub min_eos_p: f32,
}

impl Default for SemanticParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            min_eos_p: 0.05,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait SpeechEngine {
    /// Rate of every buffer this engine returns.
    fn sample_rate(&self) -> u32;

    /// One-time model preload; call before any synthesis.
    async fn preload(&self) -> Result<(), VoiceError>;

    /// Direct text-to-speech with a built-in preset.
    async fn generate_audio(
        &self,
        text: &str,
        preset: &VoicePreset,
    ) -> Result<AudioBuffer, VoiceError>;

    /// Text → semantic tokens conditioned on `prompt`.
    async fn generate_semantic(
        &self,
        text: &str,
        prompt: SemanticPrompt<'_>,
        params: &SemanticParams,
    ) -> Result<VoiceEmbedding, VoiceError>;

    /// Render semantic tokens to a waveform.
    async fn semantic_to_waveform(&self, tokens: &VoiceEmbedding)
    -> Result<AudioBuffer, VoiceError>;
}

impl<T: SpeechEngine> SpeechEngine for &T {
    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    async fn preload(&self) -> Result<(), VoiceError> {
        (**self).preload().await
    }

    async fn generate_audio(
        &self,
        text: &str,
        preset: &VoicePreset,
    ) -> Result<AudioBuffer, VoiceError> {
        (**self).generate_audio(text, preset).await
    }

    async fn generate_semantic(
        &self,
        text: &str,
        prompt: SemanticPrompt<'_>,
        params: &SemanticParams,
    ) -> Result<VoiceEmbedding, VoiceError> {
        (**self).generate_semantic(text, prompt, params).await
    }

    async fn semantic_to_waveform(
        &self,
        tokens: &VoiceEmbedding,
    ) -> Result<AudioBuffer, VoiceError> {
        (**self).semantic_to_waveform(tokens).await
    }
}
