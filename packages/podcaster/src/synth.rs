//! Per-utterance speech synthesis.

use podcaster_domain::{AudioBuffer, Utterance, VoiceError, VoiceHandle};

use crate::audio;
use crate::engine::{SemanticParams, SemanticPrompt, SpeechEngine};
use crate::voice::VoiceMap;

/// An utterance that produced no audio.
#[derive(Debug, Clone)]
pub struct SkippedUtterance {
    /// Position in the parsed transcript.
    pub index: usize,
    pub utterance: Utterance,
    pub reason: String,
}

/// Outcome of synthesizing a whole transcript.
#[derive(Debug, Default)]
pub struct SynthesisReport {
    /// Successful segments in transcript order, tagged with their index.
    pub segments: Vec<(usize, AudioBuffer)>,
    pub skipped: Vec<SkippedUtterance>,
}

impl SynthesisReport {
    /// Segment buffers in order, without their indices.
    pub fn buffers(&self) -> Vec<&AudioBuffer> {
        self.segments.iter().map(|(_, buffer)| buffer).collect()
    }
}

pub struct Synthesizer<'a, E> {
    engine: E,
    params: &'a SemanticParams,
    output_rate: u32,
}

impl<'a, E: SpeechEngine> Synthesizer<'a, E> {
    pub fn new(engine: E, params: &'a SemanticParams, output_rate: u32) -> Self {
        Self {
            engine,
            params,
            output_rate,
        }
    }

    /// Speak `text` with `voice`, returning audio at the output rate.
    pub async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceHandle,
    ) -> Result<AudioBuffer, VoiceError> {
        let audio = match voice {
            VoiceHandle::Preset(preset) => self.engine.generate_audio(text, preset).await?,
            VoiceHandle::Embedding(embedding) => {
                let tokens = self
                    .engine
                    .generate_semantic(text, SemanticPrompt::Embedding(embedding), self.params)
                    .await?;
                self.engine.semantic_to_waveform(&tokens).await?
            }
        };

        if audio.is_empty() {
            return Err(VoiceError::Synthesis("engine returned empty audio".into()));
        }
        audio::conform(audio, self.output_rate)
    }

    /// Synthesize every utterance in order, one at a time.
    ///
    /// A failed utterance is logged and recorded in the report; the rest of
    /// the transcript still runs.
    pub async fn synthesize_all(
        &self,
        utterances: &[Utterance],
        voices: &VoiceMap,
    ) -> SynthesisReport {
        let mut report = SynthesisReport::default();
        let total = utterances.len();

        for (index, utterance) in utterances.iter().enumerate() {
            let voice = voices.resolve(utterance.speaker());
            tracing::info!(
                line = index + 1,
                total,
                speaker = utterance.speaker(),
                voice = %voice.describe(),
                "synthesizing"
            );

            match self.synthesize(utterance.text(), voice).await {
                Ok(audio) => {
                    tracing::debug!(line = index + 1, secs = audio.duration_secs(), "segment ready");
                    report.segments.push((index, audio));
                }
                Err(e) => {
                    tracing::warn!(
                        line = index + 1,
                        speaker = utterance.speaker(),
                        text = utterance.text(),
                        error = %e,
                        "skipping utterance"
                    );
                    report.skipped.push(SkippedUtterance {
                        index,
                        utterance: utterance.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }
}
