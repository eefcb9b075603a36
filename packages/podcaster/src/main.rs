//! Main entry point for podcaster

use anyhow::{Context, Result};
use clap::Parser;
use podcaster::audition::audition;
use podcaster::cli::{Cli, Commands, ConfigAction, init_logging};
use podcaster::{
    BarkHttpEngine, GroqClient, Pipeline, PodcastConfig, PodcastError, PodcastReport,
    ScriptSource,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = PodcastConfig::load(cli.config.as_deref()).await?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    match cli.command {
        Commands::Run {
            input,
            output_dir,
            use_script,
        } => {
            let source = if use_script {
                ScriptSource::Prewritten
            } else {
                ScriptSource::Generate
            };
            if let Err(e) = run_podcast(&config, &input, &output_dir, source).await {
                if e.is_missing_credentials() {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
                return Err(e.into());
            }
        }

        Commands::Audition {
            output_dir,
            text,
            presets,
        } => {
            let engine = BarkHttpEngine::new(&config.engine)?;
            let report = audition(&engine, &output_dir, &text, presets).await?;
            for (preset, path) in &report.written {
                println!("✓ {preset} -> {}", path.display());
            }
            for (preset, reason) in &report.failed {
                println!("✗ {preset}: {reason}");
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let rendered = config.to_toml().context("rendering configuration")?;
                println!("{rendered}");
            }
        },
    }

    Ok(())
}

async fn run_podcast(
    config: &PodcastConfig,
    input: &std::path::Path,
    output_dir: &std::path::Path,
    source: ScriptSource,
) -> Result<(), PodcastError> {
    // Only script generation needs credentials.
    let generator = match source {
        ScriptSource::Generate => Some(GroqClient::from_env(&config.generator)?),
        ScriptSource::Prewritten => None,
    };
    let engine = BarkHttpEngine::new(&config.engine)?;
    let pipeline = Pipeline::new(config, generator, engine);

    let script = pipeline.prepare_script(input, source).await?;
    println!("Generated/Loaded podcast script:");
    println!("{script}");

    let report = pipeline.render(script, output_dir).await?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &PodcastReport) {
    if !report.skipped.is_empty() {
        println!(
            "Skipped {} of {} lines:",
            report.skipped.len(),
            report.utterances
        );
        for skipped in &report.skipped {
            println!("  line {}: {} ({})", skipped.index + 1, skipped.utterance, skipped.reason);
        }
    }
    println!(
        "Full podcast audio saved to: {} ({:.1}s)",
        report.output_path.display(),
        report.duration_secs
    );
}
