//! # Podcaster Domain
//!
//! Shared domain objects for the podcaster pipeline.
//!
//! Everything here is a plain value type: no I/O, no engine calls. The
//! `podcaster` crate depends on these to pass utterances, voices and audio
//! between its stages.

pub mod audio_buffer;
pub mod prompt_context;
pub mod utterance;
pub mod voice_error;
pub mod voice_handle;
pub mod voice_preset;

pub use audio_buffer::AudioBuffer;
pub use prompt_context::PromptContext;
pub use utterance::Utterance;
pub use voice_error::VoiceError;
pub use voice_handle::{VoiceEmbedding, VoiceHandle};
pub use voice_preset::VoicePreset;

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        AudioBuffer, PromptContext, Utterance, VoiceEmbedding, VoiceError, VoiceHandle,
        VoicePreset,
    };
}
