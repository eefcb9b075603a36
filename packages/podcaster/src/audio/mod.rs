//! Low-level audio helpers
//!
//! * WAV decode (sample files, engine responses)  → [`decode_wav`], [`read_wav`]
//! * WAV export (16-bit PCM mono)                  → [`write_wav`]
//! * Mono resampling                               → [`resample_mono`], [`conform`]

pub mod resample;
pub mod wav;

pub use resample::{conform, resample_mono};
pub use wav::{decode_wav, read_wav, write_wav};
