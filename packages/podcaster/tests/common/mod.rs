//! In-process fakes for the generator and the speech engine.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use podcaster::engine::{SemanticParams, SemanticPrompt, SpeechEngine};
use podcaster::error::GenerationError;
use podcaster::llm::TextGenerator;
use podcaster_domain::{AudioBuffer, VoiceEmbedding, VoiceError, VoicePreset};

pub const RATE: u32 = 24_000;

/// Replies from a queue and counts calls.
#[derive(Default)]
pub struct FakeGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(replies: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl TextGenerator for FakeGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _model: &str,
        _max_tokens: u32,
    ) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}

/// Each text maps to a constant-valued clip whose level and length are
/// derived from the text, so the output file shows which lines made it in.
///
/// Any text containing `FAIL` is refused.
#[derive(Default)]
pub struct FakeEngine {
    pub rate: Option<u32>,
    pub calls: Mutex<Vec<String>>,
    pub preloads: Mutex<usize>,
}

impl FakeEngine {
    pub fn at_rate(rate: u32) -> Self {
        Self {
            rate: Some(rate),
            ..Self::default()
        }
    }

    pub fn clip_for(text: &str, rate: u32) -> AudioBuffer {
        let level = (text.len() % 8) as f32 / 10.0 + 0.1;
        AudioBuffer::new(vec![level; 100 + text.len()], rate)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn check(&self, call: String, text: &str) -> Result<(), VoiceError> {
        self.calls.lock().unwrap().push(call);
        if text.contains("FAIL") {
            return Err(VoiceError::Synthesis(format!("refused: {text}")));
        }
        Ok(())
    }
}

impl SpeechEngine for FakeEngine {
    fn sample_rate(&self) -> u32 {
        self.rate.unwrap_or(RATE)
    }

    async fn preload(&self) -> Result<(), VoiceError> {
        *self.preloads.lock().unwrap() += 1;
        Ok(())
    }

    async fn generate_audio(
        &self,
        text: &str,
        preset: &VoicePreset,
    ) -> Result<AudioBuffer, VoiceError> {
        self.check(format!("audio:{preset}:{text}"), text)?;
        Ok(Self::clip_for(text, self.sample_rate()))
    }

    async fn generate_semantic(
        &self,
        text: &str,
        prompt: SemanticPrompt<'_>,
        _params: &SemanticParams,
    ) -> Result<VoiceEmbedding, VoiceError> {
        let kind = match prompt {
            SemanticPrompt::Audio(_) => "sample",
            SemanticPrompt::Embedding(_) => "embedding",
        };
        self.check(format!("semantic:{kind}:{text}"), text)?;
        Ok(VoiceEmbedding::new(text.bytes().map(u32::from).collect()))
    }

    async fn semantic_to_waveform(
        &self,
        tokens: &VoiceEmbedding,
    ) -> Result<AudioBuffer, VoiceError> {
        let text: String = tokens.tokens().iter().filter_map(|&t| char::from_u32(t)).collect();
        self.check(format!("waveform:{text}"), &text)?;
        Ok(Self::clip_for(&text, self.sample_rate()))
    }
}

/// Assert two sample runs match within 16-bit quantization.
pub fn assert_samples_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "sample count differs");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-3, "sample {i}: {a} vs {e}");
    }
}
