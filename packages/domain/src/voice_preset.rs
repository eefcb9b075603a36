//! Built-in voice preset identifier understood directly by the engine.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoicePreset(pub String);

impl VoicePreset {
    /// Create a new preset identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The numbered English speaker presets shipped with Bark (`v2/en_speaker_N`).
    pub fn english_speaker(index: u8) -> Self {
        Self(format!("v2/en_speaker_{index}"))
    }

    /// Get the underlying identifier string.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoicePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
