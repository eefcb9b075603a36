//! Resolved synthesis target for one speaker.

use crate::voice_preset::VoicePreset;

/// Semantic token sequence derived once from a voice sample.
///
/// Opaque to everything except the engine that produced it; the pipeline only
/// stores it and hands it back when conditioning later synthesis calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceEmbedding(Vec<u32>);

impl VoiceEmbedding {
    pub fn new(tokens: Vec<u32>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Either a named preset or a precomputed embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceHandle {
    /// Direct single-call synthesis with a built-in voice.
    Preset(VoicePreset),
    /// Two-stage synthesis conditioned on a derived voice.
    Embedding(VoiceEmbedding),
}

impl VoiceHandle {
    pub fn is_preset(&self) -> bool {
        matches!(self, Self::Preset(_))
    }

    /// Short human-readable label for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Preset(preset) => format!("preset {preset}"),
            Self::Embedding(embedding) => format!("embedding ({} tokens)", embedding.len()),
        }
    }
}

impl From<VoicePreset> for VoiceHandle {
    fn from(preset: VoicePreset) -> Self {
        Self::Preset(preset)
    }
}

impl From<VoiceEmbedding> for VoiceHandle {
    fn from(embedding: VoiceEmbedding) -> Self {
        Self::Embedding(embedding)
    }
}
