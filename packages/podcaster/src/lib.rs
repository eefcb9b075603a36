//! # Podcaster
//!
//! Turns a text document into a two-host podcast episode.
//!
//! The run is a straight line: three chained LLM calls produce an outline, a
//! full script and a `Speaker: line` dialogue ([`script`]); the dialogue is
//! parsed into utterances ([`dialogue`]); each host label resolves to a voice
//! ([`voice`]); every utterance is synthesized in order ([`synth`]); and the
//! segments are joined into one WAV file ([`assemble`]). [`pipeline`] wires it
//! together.

pub mod assemble;
pub mod audio;
pub mod audition;
pub mod cli;
pub mod config;
pub mod dialogue;
pub mod engine;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod script;
pub mod synth;
pub mod voice;

#[cfg(test)]
mod test_support;

pub use config::PodcastConfig;
pub use engine::{BarkHttpEngine, SemanticParams, SemanticPrompt, SpeechEngine};
pub use error::{PodcastError, Result};
pub use llm::{GroqClient, TextGenerator};
pub use pipeline::{Pipeline, PodcastReport, ScriptSource};
pub use script::{ScriptGenerator, ScriptStage};
pub use synth::{SkippedUtterance, SynthesisReport, Synthesizer};
pub use voice::VoiceMap;
