//! WAV I/O through `hound`.
//!
//! Everything inside the pipeline is mono `f32`; multi-channel input keeps
//! its first channel and integer PCM is scaled to `-1.0‥+1.0`.

use std::io::Read;
use std::path::Path;

use podcaster_domain::{AudioBuffer, VoiceError};

fn audio_err(e: hound::Error) -> VoiceError {
    VoiceError::AudioProcessing(e.to_string())
}

/// Decode a WAV stream into a mono buffer.
pub fn decode_wav<R: Read>(reader: R) -> Result<AudioBuffer, VoiceError> {
    let mut reader = hound::WavReader::new(reader).map_err(audio_err)?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(audio_err)?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                return Err(VoiceError::AudioProcessing(format!(
                    "unsupported bit depth: {}",
                    spec.bits_per_sample
                )));
            }
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .map_err(audio_err)?
        }
    };

    let mono = if channels == 1 {
        interleaved
    } else {
        interleaved.into_iter().step_by(channels).collect()
    };

    Ok(AudioBuffer::new(mono, spec.sample_rate))
}

/// Read a WAV file from disk.
pub fn read_wav(path: &Path) -> Result<AudioBuffer, VoiceError> {
    let file = std::fs::File::open(path).map_err(|e| {
        VoiceError::AudioProcessing(format!("cannot open {}: {e}", path.display()))
    })?;
    decode_wav(std::io::BufReader::new(file))
}

/// Write `buffer` to `path` as 16-bit PCM mono at the buffer's own rate.
///
/// Samples are clipped to `-1.0‥+1.0` before scaling to ±32767.
pub fn write_wav(path: &Path, buffer: &AudioBuffer) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in buffer.samples() {
        writer.write_sample((s.clamp(-1.0, 1.0) * 32767.0) as i16)?;
    }
    writer.finalize()
}
