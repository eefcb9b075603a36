//! Error handling for the podcaster pipeline
//!
//! One enum per concern, nested under [`PodcastError`]. Only
//! [`GenerationError::MissingCredentials`] is meant to end the process on
//! sight; per-utterance [`VoiceError`]s are caught by the synthesizer and
//! turned into skipped lines.

use std::path::PathBuf;

use thiserror::Error;

pub use podcaster_domain::VoiceError;

use crate::script::ScriptStage;

/// Main error type for all podcaster operations
#[derive(Error, Debug)]
pub enum PodcastError {
    #[error("Script generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Voice error: {0}")]
    Voice(#[from] VoiceError),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl PodcastError {
    /// Whether this failure is a missing API key.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(
            self,
            PodcastError::Generation(GenerationError::MissingCredentials { .. })
        )
    }
}

/// Failures talking to the text-generation provider
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("{env_var} not found. Please set it in your environment variables.")]
    MissingCredentials { env_var: &'static str },

    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("template placeholder {{{field}}} has no value yet")]
    MissingField { field: String },

    #[error("{stage} failed: {source}")]
    Stage {
        stage: ScriptStage,
        #[source]
        source: Box<GenerationError>,
    },
}

impl GenerationError {
    /// The stage that failed, if this error came out of the script chain.
    pub fn stage(&self) -> Option<ScriptStage> {
        match self {
            GenerationError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Failures turning synthesized segments into the output file
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("no utterance produced audio; nothing to write")]
    NoAudio,

    #[error("WAV write failed for {path}: {source}")]
    WavWrite {
        path: PathBuf,
        source: hound::Error,
    },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Configuration parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Configuration serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Configuration validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },
}

/// File system and I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File operation failed: {path} - {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory operation failed: {path} - {source}")]
    DirectoryOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Input file is empty: {path}")]
    EmptyInput { path: PathBuf },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PodcastError>;

/// Helper trait for converting std::io::Error to IoError with context
pub trait IoErrorExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> std::result::Result<T, IoError>;
}

impl<T> IoErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>) -> std::result::Result<T, IoError> {
        self.map_err(|source| {
            let path = path.into();
            match source.kind() {
                std::io::ErrorKind::NotFound => IoError::FileNotFound { path },
                std::io::ErrorKind::PermissionDenied => IoError::PermissionDenied { path },
                _ => IoError::FileOperation { path, source },
            }
        })
    }
}

/// Helper function to create configuration validation errors
pub fn config_error(field: &str, reason: &str) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
