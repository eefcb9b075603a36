//! Mono PCM buffer with its sample rate
//!
//! Every synthesized utterance becomes one [`AudioBuffer`]; the assembler
//! appends them into a single episode buffer. Samples are `f32` in
//! `-1.0‥+1.0`.

use crate::voice_error::VoiceError;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a buffer from mono samples at `sample_rate` Hz.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// An empty buffer at `sample_rate` Hz.
    pub fn empty(sample_rate: u32) -> Self {
        Self::new(Vec::new(), sample_rate)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Append `other` to the end of this buffer.
    ///
    /// Both buffers must share a sample rate; nothing is resampled here.
    pub fn append(&mut self, other: &AudioBuffer) -> Result<(), VoiceError> {
        if other.sample_rate != self.sample_rate {
            return Err(VoiceError::SampleRateMismatch {
                expected: self.sample_rate,
                actual: other.sample_rate,
            });
        }
        self.samples.extend_from_slice(&other.samples);
        Ok(())
    }

    /// Convert this buffer into its raw samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
