//! Concatenation of synthesized segments into the final episode.

use std::path::{Path, PathBuf};

use podcaster_domain::AudioBuffer;

use crate::audio;
use crate::error::{AssemblyError, IoError, Result};

/// Name of the episode file inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "full_podcast.wav";

/// Join `buffers` back to back. No gap is inserted between segments.
///
/// Fails with [`AssemblyError::NoAudio`] when there is nothing to join.
pub fn assemble<'a, I>(buffers: I) -> Result<AudioBuffer>
where
    I: IntoIterator<Item = &'a AudioBuffer>,
{
    let mut buffers = buffers.into_iter();
    let mut episode = buffers.next().cloned().ok_or(AssemblyError::NoAudio)?;

    for buffer in buffers {
        episode.append(buffer)?;
    }

    Ok(episode)
}

/// Write `episode` to `<dir>/full_podcast.wav`, creating `dir` if needed.
pub async fn write_output(dir: &Path, episode: &AudioBuffer) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| IoError::DirectoryOperation {
            path: dir.to_path_buf(),
            source,
        })?;

    let path = dir.join(OUTPUT_FILE_NAME);
    audio::write_wav(&path, episode).map_err(|source| AssemblyError::WavWrite {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        secs = episode.duration_secs(),
        sample_rate = episode.sample_rate(),
        "episode written"
    );
    Ok(path)
}
