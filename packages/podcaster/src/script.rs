//! Three-stage script generation: outline, full script, dialogue.

use podcaster_domain::PromptContext;

use crate::config::{GeneratorConfig, PromptConfig};
use crate::error::GenerationError;
use crate::llm::TextGenerator;
use crate::prompts::PromptTemplate;

/// One step of the generation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStage {
    Outline,
    Expansion,
    Dialogue,
}

impl std::fmt::Display for ScriptStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Outline => "outline",
            Self::Expansion => "expansion",
            Self::Dialogue => "dialogue",
        })
    }
}

/// Chains the three prompts through a [`TextGenerator`].
///
/// Stages run strictly one after another; the first provider failure ends
/// the chain and nothing from the earlier stages is returned.
pub struct ScriptGenerator<'a, G> {
    generator: G,
    settings: &'a GeneratorConfig,
    prompts: &'a PromptConfig,
}

impl<'a, G: TextGenerator> ScriptGenerator<'a, G> {
    pub fn new(generator: G, settings: &'a GeneratorConfig, prompts: &'a PromptConfig) -> Self {
        Self {
            generator,
            settings,
            prompts,
        }
    }

    /// Turn raw input text into a `Speaker: line` dialogue transcript.
    pub async fn generate(&self, input_text: &str) -> Result<String, GenerationError> {
        let ctx = PromptContext::new(input_text, self.prompts.host_profiles.as_str());

        let outline = self.run_stage(ScriptStage::Outline, &ctx).await?;
        let ctx = ctx.with_outline(outline);

        let full_script = self.run_stage(ScriptStage::Expansion, &ctx).await?;
        let ctx = ctx.with_full_script(full_script);

        self.run_stage(ScriptStage::Dialogue, &ctx).await
    }

    async fn run_stage(
        &self,
        stage: ScriptStage,
        ctx: &PromptContext,
    ) -> Result<String, GenerationError> {
        let (template, max_tokens) = match stage {
            ScriptStage::Outline => (&self.prompts.outline, self.settings.max_tokens.outline),
            ScriptStage::Expansion => (&self.prompts.expand, self.settings.max_tokens.full_script),
            ScriptStage::Dialogue => (&self.prompts.dialogue, self.settings.max_tokens.dialogue),
        };

        let wrap = |source: GenerationError| GenerationError::Stage {
            stage,
            source: Box::new(source),
        };

        let prompt = PromptTemplate::new(template).render(ctx).map_err(wrap)?;

        tracing::info!(%stage, max_tokens, "generating");
        let text = self
            .generator
            .generate(&prompt, &self.settings.model, max_tokens)
            .await
            .map_err(|e| {
                tracing::error!(%stage, error = %e, "generation failed");
                wrap(e)
            })?;
        tracing::info!(%stage, chars = text.len(), "stage complete");

        Ok(text)
    }
}
