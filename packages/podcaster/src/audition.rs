//! Preset audition: one short clip per built-in English speaker.

use std::path::{Path, PathBuf};

use podcaster_domain::VoicePreset;

use crate::audio;
use crate::engine::SpeechEngine;
use crate::error::{AssemblyError, IoError, Result};

pub const DEFAULT_AUDITION_TEXT: &str = "I don't know. [laughs] I mean, does it matter?";

/// Number of `v2/en_speaker_N` presets the engine ships with.
pub const DEFAULT_PRESET_COUNT: u8 = 10;

/// What an audition run produced.
#[derive(Debug, Default)]
pub struct AuditionReport {
    pub written: Vec<(VoicePreset, PathBuf)>,
    pub failed: Vec<(VoicePreset, String)>,
}

/// File name for the clip of preset number `index`.
pub fn clip_file_name(index: u8) -> String {
    format!("bark_output_voice_{index}.wav")
}

/// Render `text` with presets `0..count` into `output_dir`.
///
/// A preset that fails is logged and recorded; the others still run.
pub async fn audition<E: SpeechEngine>(
    engine: &E,
    output_dir: &Path,
    text: &str,
    count: u8,
) -> Result<AuditionReport> {
    engine.preload().await?;
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| IoError::DirectoryOperation {
            path: output_dir.to_path_buf(),
            source,
        })?;

    let mut report = AuditionReport::default();
    for index in 0..count {
        let preset = VoicePreset::english_speaker(index);
        tracing::info!(%preset, "auditioning");

        let clip = match engine.generate_audio(text, &preset).await {
            Ok(clip) => clip,
            Err(e) => {
                tracing::error!(%preset, error = %e, "preset failed");
                report.failed.push((preset, e.to_string()));
                continue;
            }
        };

        let path = output_dir.join(clip_file_name(index));
        audio::write_wav(&path, &clip).map_err(|source| AssemblyError::WavWrite {
            path: path.clone(),
            source,
        })?;
        tracing::info!(%preset, path = %path.display(), "clip written");
        report.written.push((preset, path));
    }

    Ok(report)
}
