//! Mono resampling with rubato's FFT resampler.

use podcaster_domain::{AudioBuffer, VoiceError};
use rubato::{FftFixedIn, Resampler};

const CHUNK: usize = 1024;
const SUB_CHUNKS: usize = 2;

/// Resample mono PCM from `sr_in` to `sr_out`.
///
/// The output is trimmed to `ceil(len * sr_out / sr_in)` frames with the
/// resampler's delay removed, so segments line up when concatenated.
pub fn resample_mono(input: &[f32], sr_in: u32, sr_out: u32) -> Result<Vec<f32>, VoiceError> {
    if sr_in == sr_out || input.is_empty() {
        return Ok(input.to_vec());
    }
    if sr_in == 0 || sr_out == 0 {
        return Err(VoiceError::AudioProcessing(format!(
            "invalid sample rates: {sr_in} -> {sr_out}"
        )));
    }

    let mut resampler =
        FftFixedIn::<f32>::new(sr_in as usize, sr_out as usize, CHUNK, SUB_CHUNKS, 1)
            .map_err(|e| VoiceError::AudioProcessing(format!("resampler setup: {e}")))?;

    let expected_len = (input.len() as f64 * sr_out as f64 / sr_in as f64).ceil() as usize;
    let delay = resampler.output_delay();
    let mut out = Vec::with_capacity(expected_len + delay + CHUNK);

    // Keep feeding (zero-padded past the end) until the delayed tail is out.
    let mut pos = 0;
    while out.len() < delay + expected_len {
        let mut block = vec![0.0f32; CHUNK];
        if pos < input.len() {
            let end = (pos + CHUNK).min(input.len());
            block[..end - pos].copy_from_slice(&input[pos..end]);
            pos = end;
        }

        let frames = resampler
            .process(&[block], None)
            .map_err(|e| VoiceError::AudioProcessing(format!("resample: {e}")))?;
        if frames[0].is_empty() {
            break;
        }
        out.extend_from_slice(&frames[0]);
    }

    out.drain(..delay.min(out.len()));
    out.truncate(expected_len);
    Ok(out)
}

/// Return `buffer` at `sample_rate`, resampling only when needed.
pub fn conform(buffer: AudioBuffer, sample_rate: u32) -> Result<AudioBuffer, VoiceError> {
    if buffer.sample_rate() == sample_rate {
        return Ok(buffer);
    }
    let resampled = resample_mono(buffer.samples(), buffer.sample_rate(), sample_rate)?;
    Ok(AudioBuffer::new(resampled, sample_rate))
}
