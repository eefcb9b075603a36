//! One speaker-attributed line of dialogue.

/// A `(speaker, text)` pair taken from a dialogue transcript.
///
/// The speaker label is kept verbatim; only voice lookup normalizes it
/// (see [`Utterance::voice_key`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    speaker: String,
    text: String,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    /// Returns the speaker label as written in the transcript.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Returns the text to be spoken.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased speaker label used to look up a voice.
    pub fn voice_key(&self) -> String {
        self.speaker.to_lowercase()
    }
}

impl std::fmt::Display for Utterance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}
