//! End-to-end run: input file → script → utterances → episode WAV.

use std::path::{Path, PathBuf};

use podcaster_domain::Utterance;

use crate::assemble;
use crate::config::PodcastConfig;
use crate::dialogue;
use crate::engine::SpeechEngine;
use crate::error::{GenerationError, IoError, IoErrorExt, Result};
use crate::llm::{GROQ_API_KEY_ENV, TextGenerator};
use crate::script::ScriptGenerator;
use crate::synth::{SkippedUtterance, Synthesizer};
use crate::voice::VoiceMap;

/// Where the dialogue comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSource {
    /// Treat the input as source material and generate a dialogue from it.
    Generate,
    /// The input already is a `Speaker: line` dialogue.
    Prewritten,
}

/// Summary of a finished run.
#[derive(Debug)]
pub struct PodcastReport {
    pub output_path: PathBuf,
    pub script: String,
    /// Number of utterances parsed from the script.
    pub utterances: usize,
    pub skipped: Vec<SkippedUtterance>,
    pub duration_secs: f32,
}

pub struct Pipeline<'a, G, E> {
    config: &'a PodcastConfig,
    generator: Option<G>,
    engine: E,
}

impl<'a, G: TextGenerator, E: SpeechEngine> Pipeline<'a, G, E> {
    /// `generator` may be `None` when only prewritten scripts will be used.
    pub fn new(config: &'a PodcastConfig, generator: Option<G>, engine: E) -> Self {
        Self {
            config,
            generator,
            engine,
        }
    }

    /// Produce the episode for `input` in `output_dir`.
    pub async fn run(
        &self,
        input: &Path,
        output_dir: &Path,
        source: ScriptSource,
    ) -> Result<PodcastReport> {
        let script = self.prepare_script(input, source).await?;
        self.render(script, output_dir).await
    }

    /// Read `input` and turn it into a dialogue script.
    ///
    /// Nothing is synthesized here; a generation failure ends the run before
    /// any engine work.
    pub async fn prepare_script(&self, input: &Path, source: ScriptSource) -> Result<String> {
        let text = read_input(input).await?;

        match source {
            ScriptSource::Prewritten => {
                tracing::info!(path = %input.display(), "using pre-written script");
                Ok(text)
            }
            ScriptSource::Generate => {
                let generator =
                    self.generator
                        .as_ref()
                        .ok_or(GenerationError::MissingCredentials {
                            env_var: GROQ_API_KEY_ENV,
                        })?;
                tracing::info!(path = %input.display(), "generating podcast script");
                let script = ScriptGenerator::new(
                    generator,
                    &self.config.generator,
                    &self.config.prompts,
                )
                .generate(&text)
                .await?;
                Ok(script)
            }
        }
    }

    /// Synthesize `script` and write the episode into `output_dir`.
    pub async fn render(&self, script: String, output_dir: &Path) -> Result<PodcastReport> {
        let utterances: Vec<Utterance> = dialogue::parse(&script);
        tracing::info!(count = utterances.len(), "parsed dialogue");

        self.engine.preload().await?;
        let engine_config = &self.config.engine;
        let voices = VoiceMap::build(&self.config.voices, &self.engine, &engine_config.semantic).await?;

        let synthesizer =
            Synthesizer::new(&self.engine, &engine_config.semantic, engine_config.sample_rate);
        let report = synthesizer.synthesize_all(&utterances, &voices).await;

        if !report.skipped.is_empty() {
            tracing::warn!(
                skipped = report.skipped.len(),
                total = utterances.len(),
                "some utterances produced no audio"
            );
        }

        let episode = assemble::assemble(report.buffers())?;
        let output_path = assemble::write_output(output_dir, &episode).await?;

        Ok(PodcastReport {
            output_path,
            script,
            utterances: utterances.len(),
            skipped: report.skipped,
            duration_secs: episode.duration_secs(),
        })
    }
}

/// Read and trim an input file. Empty content is an error.
pub async fn read_input(path: &Path) -> Result<String> {
    let raw = tokio::fs::read_to_string(path).await.with_path(path)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IoError::EmptyInput {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(trimmed.to_string())
}
