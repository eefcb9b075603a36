//! Unified error for voice resolution and speech synthesis.
use thiserror::Error;

/// Failure raised by the speech engine or by local audio handling.
#[derive(Debug, Clone, Error)]
pub enum VoiceError {
    /// The engine could not be reached or answered with a failure.
    #[error("engine: {0}")]
    Engine(String),
    /// Synthesis of a single piece of text failed.
    #[error("synthesis: {0}")]
    Synthesis(String),
    /// A voice embedding could not be derived from a sample.
    #[error("embedding: {0}")]
    Embedding(String),
    /// Decoding, resampling or encoding audio failed.
    #[error("audio processing: {0}")]
    AudioProcessing(String),
    /// Two buffers with different sample rates were combined.
    #[error("sample rate mismatch: expected {expected} Hz, got {actual} Hz")]
    SampleRateMismatch {
        /// Rate of the buffer being appended to.
        expected: u32,
        /// Rate of the offending buffer.
        actual: u32,
    },
}
