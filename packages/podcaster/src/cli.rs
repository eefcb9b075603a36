//! Command-line interface for podcaster

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::audition::{DEFAULT_AUDITION_TEXT, DEFAULT_PRESET_COUNT};
use crate::config::PodcastConfig;

/// Turn text into a two-host podcast episode
#[derive(Parser, Debug)]
#[command(
    name = "podcaster",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a two-host podcast episode from text",
    long_about = "Writes an outline, script and dialogue with a Groq-hosted model, \
                  then voices every line with Bark and joins them into one WAV file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true, env = "PODCASTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (suppress non-error messages)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(long, global = true, default_value = "human")]
    pub log_format: LogFormat,

    /// Override the text-generation model
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Override the speech engine base URL
    #[arg(long, global = true, env = "PODCASTER_ENGINE_URL")]
    pub engine_url: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate (or load) a script and render it to full_podcast.wav
    Run {
        /// Source text, or a `Speaker: line` script with --use-script
        input: PathBuf,

        /// Directory for full_podcast.wav (created if missing)
        output_dir: PathBuf,

        /// Treat the input as a finished dialogue script
        #[arg(long)]
        use_script: bool,
    },

    /// Render a sample line with each built-in preset
    Audition {
        /// Directory for the clips (created if missing)
        output_dir: PathBuf,

        /// Line to speak
        #[arg(long, default_value = DEFAULT_AUDITION_TEXT)]
        text: String,

        /// How many presets to try, starting from v2/en_speaker_0
        #[arg(long, default_value_t = DEFAULT_PRESET_COUNT)]
        presets: u8,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved configuration as TOML
    Show,
}

/// Log output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output
    Human,
    /// JSON lines for machine processing
    Json,
    /// Compact single-line output
    Compact,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded file.
    pub fn apply_overrides(&self, config: &mut PodcastConfig) {
        if let Some(model) = &self.model {
            config.generator.model = model.clone();
        }
        if let Some(url) = &self.engine_url {
            config.engine.base_url = url.clone();
        }
    }

    fn level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// Install the global subscriber. `RUST_LOG` directives win over `-v`/`-q`.
pub fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(cli.level().into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Human => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
